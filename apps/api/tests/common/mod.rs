//! Shared fixtures for API integration tests
//!
//! In-memory repositories stand in for PostgreSQL so the router can be
//! driven end to end without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use chrono::{DateTime, NaiveDate, Utc};
use cit_dispatch_api::api::{router, AppState};
use cit_dispatch_api::auth::jwt::create_token;
use cit_dispatch_api::domain::calendar::BusinessCalendar;
use cit_dispatch_api::domain::operator::{Operator, Username};
use cit_dispatch_api::domain::repositories::{
    OperatorRepository, StaffRepository, TeamRepository, VehicleRepository,
};
use cit_dispatch_api::domain::staff::{StaffMember, StaffRole};
use cit_dispatch_api::domain::status::RecordStatus;
use cit_dispatch_api::domain::team::{Team, TeamDraft};
use cit_dispatch_api::domain::vehicle::Vehicle;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Operator seeded into every test app; `bearer()` signs for it
pub const TEST_OPERATOR_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0001);
pub const TEST_OPERATOR_USERNAME: &str = "test.operator";

pub struct MemoryStaff(pub Vec<StaffMember>);

#[async_trait]
impl StaffRepository for MemoryStaff {
    async fn find_active(&self) -> Result<Vec<StaffMember>, String> {
        Ok(self.0.iter().filter(|m| m.is_active()).cloned().collect())
    }
}

pub struct MemoryVehicles(pub Vec<Vehicle>);

#[async_trait]
impl VehicleRepository for MemoryVehicles {
    async fn find_active(&self) -> Result<Vec<Vehicle>, String> {
        Ok(self.0.iter().filter(|v| v.is_active()).cloned().collect())
    }
}

/// Team store that can be told to fail on a given create attempt
///
/// Its calendar is also the app's calendar in `setup_app`.
#[derive(Default)]
pub struct MemoryTeams {
    pub teams: Mutex<Vec<Team>>,
    pub create_calls: AtomicUsize,
    pub fail_at: Option<usize>,
    pub calendar: BusinessCalendar,
}

impl MemoryTeams {
    pub fn with_calendar(calendar: BusinessCalendar) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    /// Stores a team as if it had been created at `created_at`
    pub fn preload(&self, name: &str, created_at: DateTime<Utc>) -> Team {
        let team = Team::from_persistence(
            Uuid::new_v4(),
            name.to_string(),
            vec![Uuid::new_v4()],
            vec![],
            None,
            created_at,
        );
        self.teams.lock().unwrap().push(team.clone());
        team
    }

    pub fn stored(&self) -> Vec<Team> {
        self.teams.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamRepository for MemoryTeams {
    async fn create(&self, draft: &TeamDraft, created_by: Option<Uuid>) -> Result<Team, String> {
        let attempt = self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(attempt) {
            return Err("database unavailable".to_string());
        }
        let team = Team::from_draft(draft, created_by)?;
        self.teams.lock().unwrap().push(team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.stored().into_iter().find(|t| t.id() == id))
    }

    async fn count_created_on(&self, date: NaiveDate) -> Result<i64, String> {
        Ok(self.find_created_on(date).await?.len() as i64)
    }

    async fn find_created_on(&self, date: NaiveDate) -> Result<Vec<Team>, String> {
        Ok(self
            .stored()
            .into_iter()
            .filter(|t| self.calendar.date_of(t.created_at()) == date)
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryOperators(pub Mutex<Vec<Operator>>);

#[async_trait]
impl OperatorRepository for MemoryOperators {
    async fn create(&self, operator: Operator) -> Result<Uuid, String> {
        let mut operators = self.0.lock().unwrap();
        if operators.iter().any(|o| o.username == operator.username) {
            return Err(
                "duplicate key value violates unique constraint \"operators_username_key\""
                    .to_string(),
            );
        }
        let id = operator.id;
        operators.push(operator);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Operator>, String> {
        Ok(self.0.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Operator>, String> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.username == username)
            .cloned())
    }

    async fn update_last_login(&self, _operator_id: Uuid) -> Result<(), String> {
        Ok(())
    }
}

/// Handles to the stores behind a test router
pub struct TestApp {
    pub router: Router,
    pub teams: Arc<MemoryTeams>,
    pub operators: Arc<MemoryOperators>,
    pub staff: Vec<StaffMember>,
    pub vehicles: Vec<Vehicle>,
}

pub fn staff_member(role: &str, status: RecordStatus) -> StaffMember {
    StaffMember {
        id: Uuid::new_v4(),
        name: format!("{} {}", role, &Uuid::new_v4().simple().to_string()[..6]),
        role: StaffRole::from(role),
        status,
    }
}

pub fn vehicle(status: RecordStatus) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        registration: format!("CIT-{}", &Uuid::new_v4().simple().to_string()[..4]),
        status,
    }
}

/// Active roster with the given pool sizes
pub fn roster(
    leaders: usize,
    drivers: usize,
    police: usize,
    vehicles: usize,
) -> (Vec<StaffMember>, Vec<Vehicle>) {
    let mut staff = Vec::new();
    staff.extend((0..leaders).map(|_| staff_member("Team Leader", RecordStatus::Active)));
    staff.extend((0..drivers).map(|_| staff_member("Driver", RecordStatus::Active)));
    staff.extend((0..police).map(|_| staff_member("Police", RecordStatus::Active)));
    let fleet = (0..vehicles).map(|_| vehicle(RecordStatus::Active)).collect();
    (staff, fleet)
}

pub fn setup_app(staff: Vec<StaffMember>, vehicles: Vec<Vehicle>, teams: MemoryTeams) -> TestApp {
    let calendar = teams.calendar;
    let teams = Arc::new(teams);
    let operators = Arc::new(MemoryOperators::default());
    operators.0.lock().unwrap().push(Operator {
        id: TEST_OPERATOR_ID,
        username: Username::new(TEST_OPERATOR_USERNAME).unwrap(),
        password_hash: "not-used-by-bearer-tests".to_string(),
        full_name: "Test Operator".to_string(),
        is_active: true,
    });
    let state = AppState {
        staff: Arc::new(MemoryStaff(staff.clone())),
        vehicles: Arc::new(MemoryVehicles(vehicles.clone())),
        teams: teams.clone(),
        operators: operators.clone(),
        jwt_secret: Arc::from(TEST_SECRET),
        calendar,
    };

    TestApp {
        router: router(state),
        teams,
        operators,
        staff,
        vehicles,
    }
}

/// Bearer token for the seeded operator
pub fn bearer() -> String {
    bearer_for(TEST_OPERATOR_ID, TEST_OPERATOR_USERNAME)
}

/// Validly signed token for any operator id, stored or not
pub fn bearer_for(operator_id: Uuid, username: &str) -> String {
    let token = create_token(operator_id, username, TEST_SECRET).unwrap();
    format!("Bearer {}", token)
}

/// Marks the seeded operator inactive
pub fn deactivate_test_operator(app: &TestApp) {
    for operator in app.operators.0.lock().unwrap().iter_mut() {
        if operator.id == TEST_OPERATOR_ID {
            operator.is_active = false;
        }
    }
}

/// Calendar at a whole-hour offset east of UTC (negative for west)
pub fn calendar_at(hours: i32) -> BusinessCalendar {
    BusinessCalendar::new(chrono::FixedOffset::east_opt(hours * 3600).unwrap())
}

/// Business day printed in a `Team N - YYYY-MM-DD` label
pub fn label_day(name: &str) -> NaiveDate {
    let (_, day) = name.rsplit_once(" - ").unwrap();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap()
}

pub fn created_at(team: &Value) -> DateTime<Utc> {
    team["created_at"].as_str().unwrap().parse().unwrap()
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
