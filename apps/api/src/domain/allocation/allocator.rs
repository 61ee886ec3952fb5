use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

use super::errors::{AllocationError, AllocationResult};
use super::executor::{apply_plans, AllocatedTeam};
use super::plan::plan_teams;
use crate::domain::repositories::{StaffRepository, TeamRepository, VehicleRepository};
use crate::domain::team::TeamsToday;

/// Runs the daily team shuffle against the roster, fleet and team store
///
/// A run is: once-per-day check, one snapshot read of active staff and
/// vehicles, planning, then sequential persistence. The snapshot is not
/// re-read, so status changes made while the run is in progress are not
/// seen. The check and the creates are not atomic; two operators shuffling
/// at the same moment can both pass the check.
pub struct TeamAllocator<'a> {
    staff: &'a dyn StaffRepository,
    vehicles: &'a dyn VehicleRepository,
    teams: &'a dyn TeamRepository,
}

impl<'a> TeamAllocator<'a> {
    pub fn new(
        staff: &'a dyn StaffRepository,
        vehicles: &'a dyn VehicleRepository,
        teams: &'a dyn TeamRepository,
    ) -> Self {
        Self {
            staff,
            vehicles,
            teams,
        }
    }

    /// Whether any team was already created on `today`
    pub async fn check_today(&self, today: NaiveDate) -> AllocationResult<TeamsToday> {
        let count = self
            .teams
            .count_created_on(today)
            .await
            .map_err(AllocationError::Lookup)?;

        Ok(TeamsToday::from_count(count))
    }

    /// Builds and persists today's teams
    ///
    /// # Arguments
    /// * `today` - Calendar day used for the guard and the team names
    /// * `created_by` - Operator recorded on every created team
    /// * `rng` - Source for the role and vehicle shuffles
    ///
    /// # Errors
    /// * `GuardViolation` - teams already exist today; nothing is read or created
    /// * `InsufficientVehicles` / `InsufficientStaff` - nothing is created
    /// * `PersistenceFailure` - some teams may have been created, see `created`
    /// * `Lookup` - the guard or snapshot could not be read
    pub async fn shuffle<R: Rng + Send + ?Sized>(
        &self,
        today: NaiveDate,
        created_by: Option<Uuid>,
        rng: &mut R,
    ) -> AllocationResult<Vec<AllocatedTeam>> {
        let guard = self.check_today(today).await?;
        if guard.has_teams_today {
            tracing::warn!(
                %today,
                existing = guard.team_count,
                "Shuffle refused, teams already exist for today"
            );
            return Err(AllocationError::GuardViolation {
                team_count: guard.team_count,
            });
        }

        let staff = self
            .staff
            .find_active()
            .await
            .map_err(AllocationError::Lookup)?;
        let vehicles = self
            .vehicles
            .find_active()
            .await
            .map_err(AllocationError::Lookup)?;

        tracing::info!(
            %today,
            staff = staff.len(),
            vehicles = vehicles.len(),
            "Shuffling teams"
        );

        let plans = plan_teams(&staff, &vehicles, today, rng).map_err(|e| {
            tracing::warn!(%today, "Shuffle aborted: {}", e);
            e
        })?;

        tracing::info!(%today, teams = plans.len(), "Creating shuffled teams");

        apply_plans(plans, created_by, self.teams).await
    }
}
