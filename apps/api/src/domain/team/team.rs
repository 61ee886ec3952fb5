use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::{validate_composition, TeamDraft};

/// Team aggregate root
///
/// A named crew of staff members and the vehicles they operate for a day.
/// Member and vehicle order is preserved as given.
///
/// # Invariants
/// - Name cannot be empty
/// - At least one member
/// - No staff member or vehicle listed twice
///
/// # Example
/// ```
/// use cit_dispatch_api::domain::team::Team;
/// use uuid::Uuid;
///
/// let team = Team::new(
///     "Team 1 - 2026-10-16".to_string(),
///     vec![Uuid::new_v4(), Uuid::new_v4()],
///     vec![Uuid::new_v4()],
///     None,
/// ).expect("valid team");
///
/// assert_eq!(team.name(), "Team 1 - 2026-10-16");
/// assert_eq!(team.member_ids().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Uuid,
    name: String,
    member_ids: Vec<Uuid>,
    vehicle_ids: Vec<Uuid>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - Display label (cannot be blank)
    /// * `member_ids` - Staff assigned to the team, in display order
    /// * `vehicle_ids` - Vehicles assigned to the team, in display order
    /// * `created_by` - Operator who created the team, if known
    ///
    /// # Returns
    /// * `Ok(Team)` - New team stamped with the current time
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        name: String,
        member_ids: Vec<Uuid>,
        vehicle_ids: Vec<Uuid>,
        created_by: Option<Uuid>,
    ) -> Result<Self, String> {
        validate_composition(&name, &member_ids, &vehicle_ids)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            member_ids,
            vehicle_ids,
            created_by,
            created_at: Utc::now(),
        })
    }

    /// Creates a Team from a `createTeam` request body
    pub fn from_draft(draft: &TeamDraft, created_by: Option<Uuid>) -> Result<Self, String> {
        Self::new(
            draft.name.clone(),
            draft.member_ids.clone(),
            draft.vehicle_ids.clone(),
            created_by,
        )
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_ids(&self) -> &[Uuid] {
        &self.member_ids
    }

    pub fn vehicle_ids(&self) -> &[Uuid] {
        &self.vehicle_ids
    }

    pub fn created_by(&self) -> Option<Uuid> {
        self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation; only repository implementations should call this.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        member_ids: Vec<Uuid>,
        vehicle_ids: Vec<Uuid>,
        created_by: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            member_ids,
            vehicle_ids,
            created_by,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_members_and_vehicles() {
        let members = vec![Uuid::new_v4(), Uuid::new_v4()];
        let vehicles = vec![Uuid::new_v4()];
        let operator = Uuid::new_v4();

        let team = Team::new(
            "Morning run".to_string(),
            members.clone(),
            vehicles.clone(),
            Some(operator),
        )
        .unwrap();

        assert_eq!(team.name(), "Morning run");
        assert_eq!(team.member_ids(), members.as_slice());
        assert_eq!(team.vehicle_ids(), vehicles.as_slice());
        assert_eq!(team.created_by(), Some(operator));
    }

    #[test]
    fn blank_name_fails() {
        let result = Team::new("   ".to_string(), vec![Uuid::new_v4()], vec![], None);

        assert!(result.unwrap_err().contains("name cannot be empty"));
    }

    #[test]
    fn team_without_members_fails() {
        let result = Team::new("Team".to_string(), vec![], vec![Uuid::new_v4()], None);

        assert!(result.is_err());
    }

    #[test]
    fn duplicate_member_fails() {
        let id = Uuid::new_v4();
        let result = Team::new("Team".to_string(), vec![id, Uuid::new_v4(), id], vec![], None);

        assert!(result.unwrap_err().contains(&id.to_string()));
    }

    #[test]
    fn duplicate_vehicle_fails() {
        let vehicle = Uuid::new_v4();
        let result = Team::new(
            "Team".to_string(),
            vec![Uuid::new_v4()],
            vec![vehicle, vehicle],
            None,
        );

        assert!(result.unwrap_err().contains("Vehicle"));
    }

    #[test]
    fn from_draft_keeps_order() {
        let draft = TeamDraft {
            name: "Team 2 - 2026-10-16".to_string(),
            member_ids: vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()],
            vehicle_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        };

        let team = Team::from_draft(&draft, None).unwrap();

        assert_eq!(team.name(), draft.name);
        assert_eq!(team.member_ids(), draft.member_ids.as_slice());
        assert_eq!(team.vehicle_ids(), draft.vehicle_ids.as_slice());
        assert!(team.created_by().is_none());
    }
}
