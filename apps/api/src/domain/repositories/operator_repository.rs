use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::operator::{Operator, Username};

/// Repository trait for dashboard operator accounts
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    /// Create a new operator
    async fn create(&self, operator: Operator) -> Result<Uuid, String>;

    /// Find an operator by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Operator>, String>;

    /// Find an operator by username
    async fn find_by_username(&self, username: &Username) -> Result<Option<Operator>, String>;

    /// Update operator's last login timestamp
    async fn update_last_login(&self, operator_id: Uuid) -> Result<(), String>;
}
