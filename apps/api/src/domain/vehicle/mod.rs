// Vehicle domain module

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::status::RecordStatus;

/// An armoured vehicle in the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration: String,
    pub status: RecordStatus,
}

impl Vehicle {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
