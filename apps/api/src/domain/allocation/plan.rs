use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::errors::{AllocationError, AllocationResult};
use super::{DRIVERS_PER_TEAM, LEADERS_PER_TEAM, POLICE_PER_TEAM, VEHICLES_PER_TEAM};
use crate::domain::staff::{StaffMember, StaffRole};
use crate::domain::team::TeamDraft;
use crate::domain::vehicle::Vehicle;

/// One fully staffed team, before it is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPlan {
    /// Zero-based position in the run; teams are created in this order
    pub index: usize,
    pub name: String,
    pub team_leader: StaffMember,
    pub drivers: [StaffMember; DRIVERS_PER_TEAM],
    pub police: [StaffMember; POLICE_PER_TEAM],
    pub vehicles: [Vehicle; VEHICLES_PER_TEAM],
}

impl TeamPlan {
    /// Staff ids in creation order: leader, drivers, police
    pub fn member_ids(&self) -> Vec<Uuid> {
        std::iter::once(&self.team_leader)
            .chain(self.drivers.iter())
            .chain(self.police.iter())
            .map(|member| member.id)
            .collect()
    }

    pub fn vehicle_ids(&self) -> Vec<Uuid> {
        self.vehicles.iter().map(|vehicle| vehicle.id).collect()
    }

    pub fn draft(&self) -> TeamDraft {
        TeamDraft {
            name: self.name.clone(),
            member_ids: self.member_ids(),
            vehicle_ids: self.vehicle_ids(),
        }
    }
}

/// Label given to the `index`-th team of a run
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use cit_dispatch_api::domain::allocation::plan::team_name;
///
/// let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert_eq!(team_name(0, day), "Team 1 - 2026-10-16");
/// ```
pub fn team_name(index: usize, date: NaiveDate) -> String {
    format!("Team {} - {}", index + 1, date.format("%Y-%m-%d"))
}

/// Number of complete teams the pools can fill
///
/// Greedy bound: each pool is divided by its per-team requirement and the
/// smallest quotient wins. Leftovers are never recombined into a different
/// composition.
pub fn max_teams(leaders: usize, drivers: usize, police: usize, vehicles: usize) -> usize {
    [
        leaders / LEADERS_PER_TEAM,
        drivers / DRIVERS_PER_TEAM,
        police / POLICE_PER_TEAM,
        vehicles / VEHICLES_PER_TEAM,
    ]
    .into_iter()
    .min()
    .unwrap_or(0)
}

/// Splits a staff and vehicle snapshot into randomized teams
///
/// Inactive records are dropped, active staff are grouped by role and each
/// group is shuffled independently, then the active vehicles are shuffled.
/// Team `i` takes leader `i`, drivers and police `2i`/`2i+1`, and vehicles
/// `2i`/`2i+1`, so no record lands in two teams.
///
/// The vehicle count is checked before any grouping or shuffling; a failed
/// check leaves `rng` untouched. Role groups are shuffled in `StaffRole`
/// order so a seeded RNG always yields the same plan.
///
/// # Errors
/// * `InsufficientVehicles` - fewer than two active vehicles
/// * `InsufficientStaff` - the pools cannot fill a single team
pub fn plan_teams<R: Rng + ?Sized>(
    staff: &[StaffMember],
    vehicles: &[Vehicle],
    date: NaiveDate,
    rng: &mut R,
) -> AllocationResult<Vec<TeamPlan>> {
    let mut active_vehicles: Vec<Vehicle> =
        vehicles.iter().filter(|v| v.is_active()).cloned().collect();

    if active_vehicles.len() < VEHICLES_PER_TEAM {
        return Err(AllocationError::InsufficientVehicles {
            active: active_vehicles.len(),
        });
    }

    let mut pools: BTreeMap<StaffRole, Vec<StaffMember>> = BTreeMap::new();
    for member in staff.iter().filter(|m| m.is_active()) {
        pools
            .entry(member.role.clone())
            .or_default()
            .push(member.clone());
    }

    for pool in pools.values_mut() {
        pool.shuffle(rng);
    }
    active_vehicles.shuffle(rng);

    let leaders = pools.remove(&StaffRole::TeamLeader).unwrap_or_default();
    let drivers = pools.remove(&StaffRole::Driver).unwrap_or_default();
    let police = pools.remove(&StaffRole::Police).unwrap_or_default();

    let count = max_teams(
        leaders.len(),
        drivers.len(),
        police.len(),
        active_vehicles.len(),
    );

    tracing::debug!(
        leaders = leaders.len(),
        drivers = drivers.len(),
        police = police.len(),
        vehicles = active_vehicles.len(),
        teams = count,
        "Grouped active staff and vehicles"
    );

    if count == 0 {
        return Err(AllocationError::InsufficientStaff);
    }

    let plans = leaders
        .into_iter()
        .zip(drivers.chunks_exact(DRIVERS_PER_TEAM))
        .zip(police.chunks_exact(POLICE_PER_TEAM))
        .zip(active_vehicles.chunks_exact(VEHICLES_PER_TEAM))
        .take(count)
        .enumerate()
        .map(|(index, (((team_leader, drivers), police), vehicles))| TeamPlan {
            index,
            name: team_name(index, date),
            team_leader,
            drivers: pair(drivers),
            police: pair(police),
            vehicles: pair(vehicles),
        })
        .collect();

    Ok(plans)
}

fn pair<T: Clone>(chunk: &[T]) -> [T; 2] {
    [chunk[0].clone(), chunk[1].clone()]
}
