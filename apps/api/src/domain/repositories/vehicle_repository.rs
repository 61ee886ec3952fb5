use async_trait::async_trait;

use crate::domain::vehicle::Vehicle;

/// Read access to the vehicle fleet
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// All vehicles with an active status
    async fn find_active(&self) -> Result<Vec<Vehicle>, String>;
}
