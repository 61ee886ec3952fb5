use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Input to team creation: a name plus the staff and vehicles to attach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDraft {
    pub name: String,
    pub member_ids: Vec<Uuid>,
    pub vehicle_ids: Vec<Uuid>,
}

impl TeamDraft {
    /// Checks the draft against the rules every stored team satisfies
    ///
    /// # Errors
    /// Blank name, no members, or a staff member or vehicle listed twice.
    pub fn validate(&self) -> Result<(), String> {
        validate_composition(&self.name, &self.member_ids, &self.vehicle_ids)
    }
}

pub(super) fn validate_composition(
    name: &str,
    member_ids: &[Uuid],
    vehicle_ids: &[Uuid],
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Team name cannot be empty".to_string());
    }

    if member_ids.is_empty() {
        return Err("Team must have at least one member".to_string());
    }

    if let Some(id) = first_duplicate(member_ids) {
        return Err(format!("Staff member {} listed more than once", id));
    }

    if let Some(id) = first_duplicate(vehicle_ids) {
        return Err(format!("Vehicle {} listed more than once", id));
    }

    Ok(())
}

fn first_duplicate(ids: &[Uuid]) -> Option<Uuid> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().find(|id| !seen.insert(*id))
}

/// Answer to "have teams already been created today?"
///
/// Backs the once-per-day shuffle rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsToday {
    pub has_teams_today: bool,
    pub team_count: i64,
}

impl TeamsToday {
    /// Builds the answer from the number of teams created on the day
    ///
    /// # Example
    /// ```
    /// use cit_dispatch_api::domain::team::TeamsToday;
    ///
    /// assert!(TeamsToday::from_count(2).has_teams_today);
    /// assert!(!TeamsToday::from_count(0).has_teams_today);
    /// ```
    pub fn from_count(team_count: i64) -> Self {
        Self {
            has_teams_today: team_count > 0,
            team_count,
        }
    }
}
