use thiserror::Error;

use crate::domain::team::Team;

/// Reasons a shuffle run stops
///
/// All of these are reported to the operator; none are retried.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Teams have already been created for today")]
    GuardViolation { team_count: i64 },

    #[error("Not enough active vehicles")]
    InsufficientVehicles { active: usize },

    #[error("Not enough active staff with the required roles to create teams")]
    InsufficientStaff,

    /// A create call failed part way through. Teams in `created` were
    /// persisted before the failure and are not rolled back.
    #[error("Failed to create {team_name}: {reason}")]
    PersistenceFailure {
        team_name: String,
        reason: String,
        created: Vec<Team>,
    },

    #[error("Failed to load allocation data: {0}")]
    Lookup(String),
}

pub type AllocationResult<T> = Result<T, AllocationError>;
