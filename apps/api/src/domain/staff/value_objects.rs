use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a staff member
///
/// Roles arrive as free-form strings. The three roles that make up a team
/// are matched exactly (case and spacing included); every other string is
/// kept verbatim in `Other` and ignored by team allocation.
///
/// # Example
/// ```
/// use cit_dispatch_api::domain::staff::StaffRole;
///
/// assert_eq!(StaffRole::from("Team Leader"), StaffRole::TeamLeader);
/// assert_eq!(StaffRole::from("driver"), StaffRole::Other("driver".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StaffRole {
    TeamLeader,
    Driver,
    Police,
    Other(String),
}

impl StaffRole {
    pub fn as_str(&self) -> &str {
        match self {
            StaffRole::TeamLeader => "Team Leader",
            StaffRole::Driver => "Driver",
            StaffRole::Police => "Police",
            StaffRole::Other(role) => role,
        }
    }
}

impl From<&str> for StaffRole {
    fn from(role: &str) -> Self {
        match role {
            "Team Leader" => StaffRole::TeamLeader,
            "Driver" => StaffRole::Driver,
            "Police" => StaffRole::Police,
            other => StaffRole::Other(other.to_string()),
        }
    }
}

impl From<String> for StaffRole {
    fn from(role: String) -> Self {
        match StaffRole::from(role.as_str()) {
            StaffRole::Other(_) => StaffRole::Other(role),
            known => known,
        }
    }
}

impl From<StaffRole> for String {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
