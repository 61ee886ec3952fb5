// Staff domain module
// Staff members are read-only snapshots as far as allocation is concerned

pub mod value_objects;

pub use value_objects::StaffRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::status::RecordStatus;

/// A member of the field staff
///
/// Only `role` and `status` matter to team allocation; `name` is carried
/// along so the shuffle results can be shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub role: StaffRole,
    pub status: RecordStatus,
}

impl StaffMember {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
