use async_trait::async_trait;

use crate::domain::staff::StaffMember;

/// Read access to the staff roster
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// All staff members with an active status
    async fn find_active(&self) -> Result<Vec<StaffMember>, String>;
}
