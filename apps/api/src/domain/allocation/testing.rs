// In-memory collaborators for allocation unit tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::repositories::{StaffRepository, TeamRepository, VehicleRepository};
use crate::domain::staff::{StaffMember, StaffRole};
use crate::domain::status::RecordStatus;
use crate::domain::team::{Team, TeamDraft};
use crate::domain::vehicle::Vehicle;

/// Active staff and vehicles with the requested pool sizes
pub fn roster(
    leaders: usize,
    drivers: usize,
    police: usize,
    vehicles: usize,
) -> (Vec<StaffMember>, Vec<Vehicle>) {
    let staff = [
        ("Team Leader", leaders),
        ("Driver", drivers),
        ("Police", police),
    ]
    .into_iter()
    .flat_map(|(role, count)| {
        (0..count).map(move |n| StaffMember {
            id: Uuid::new_v4(),
            name: format!("{} {}", role, n + 1),
            role: StaffRole::from(role),
            status: RecordStatus::Active,
        })
    })
    .collect();

    let fleet = (0..vehicles)
        .map(|n| Vehicle {
            id: Uuid::new_v4(),
            registration: format!("CIT-{:03}", n + 1),
            status: RecordStatus::Active,
        })
        .collect();

    (staff, fleet)
}

#[derive(Default)]
pub struct FakeStaff {
    pub staff: Vec<StaffMember>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl StaffRepository for FakeStaff {
    async fn find_active(&self) -> Result<Vec<StaffMember>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.staff.clone())
    }
}

#[derive(Default)]
pub struct FakeVehicles {
    pub vehicles: Vec<Vehicle>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl VehicleRepository for FakeVehicles {
    async fn find_active(&self) -> Result<Vec<Vehicle>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vehicles.clone())
    }
}

/// Records every create call; can be told to fail on the n-th attempt
#[derive(Default)]
pub struct FakeTeams {
    existing_today: i64,
    fail_at: Option<usize>,
    attempts: AtomicUsize,
    created: Mutex<Vec<Team>>,
}

impl FakeTeams {
    pub fn with_existing(existing_today: i64) -> Self {
        Self {
            existing_today,
            ..Self::default()
        }
    }

    pub fn failing_at(attempt: usize) -> Self {
        Self {
            fail_at: Some(attempt),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<Team> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeamRepository for FakeTeams {
    async fn create(&self, draft: &TeamDraft, created_by: Option<Uuid>) -> Result<Team, String> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(attempt) {
            return Err("connection reset".to_string());
        }

        let team = Team::from_draft(draft, created_by)?;
        self.created.lock().unwrap().push(team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.created().into_iter().find(|t| t.id() == id))
    }

    async fn count_created_on(&self, _date: NaiveDate) -> Result<i64, String> {
        Ok(self.existing_today + self.created().len() as i64)
    }

    async fn find_created_on(&self, _date: NaiveDate) -> Result<Vec<Team>, String> {
        Ok(self.created())
    }
}
