use serde::{Deserialize, Serialize};
use std::fmt;

/// Active flag shared by staff and vehicle records
///
/// Stored and transmitted as an integer: `1` is active, `0` is inactive.
/// Anything else is rejected rather than coerced.
///
/// # Example
/// ```
/// use cit_dispatch_api::domain::status::RecordStatus;
///
/// assert_eq!(RecordStatus::try_from(1), Ok(RecordStatus::Active));
/// assert!(RecordStatus::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum RecordStatus {
    Inactive,
    Active,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        self == RecordStatus::Active
    }
}

impl TryFrom<i16> for RecordStatus {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RecordStatus::Inactive),
            1 => Ok(RecordStatus::Active),
            other => Err(format!("Invalid status: {} (expected 0 or 1)", other)),
        }
    }
}

impl From<RecordStatus> for i16 {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Inactive => 0,
            RecordStatus::Active => 1,
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Inactive => write!(f, "inactive"),
            RecordStatus::Active => write!(f, "active"),
        }
    }
}
