use uuid::Uuid;

use super::errors::{AllocationError, AllocationResult};
use super::plan::TeamPlan;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// A persisted team together with the staff and vehicles behind its ids
#[derive(Debug, Clone)]
pub struct AllocatedTeam {
    pub team: Team,
    pub plan: TeamPlan,
}

/// Persists plans one at a time, in index order
///
/// Stops at the first failed create. Teams created before the failure stay
/// persisted and are returned inside `PersistenceFailure::created` so the
/// operator can reconcile them by hand.
pub async fn apply_plans(
    plans: Vec<TeamPlan>,
    created_by: Option<Uuid>,
    teams: &dyn TeamRepository,
) -> AllocationResult<Vec<AllocatedTeam>> {
    let mut allocated: Vec<AllocatedTeam> = Vec::with_capacity(plans.len());

    for plan in plans {
        match teams.create(&plan.draft(), created_by).await {
            Ok(team) => {
                tracing::info!(team_id = %team.id(), name = %team.name(), "Team created");
                allocated.push(AllocatedTeam { team, plan });
            }
            Err(reason) => {
                tracing::error!(
                    name = %plan.name,
                    created = allocated.len(),
                    "Team creation failed: {}",
                    reason
                );
                return Err(AllocationError::PersistenceFailure {
                    team_name: plan.name,
                    reason,
                    created: allocated.into_iter().map(|a| a.team).collect(),
                });
            }
        }
    }

    Ok(allocated)
}
