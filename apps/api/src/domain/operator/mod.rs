// Operator domain module
// Dashboard accounts that sign in and trigger allocation

pub mod value_objects;

pub use value_objects::Username;

use uuid::Uuid;

/// Operator account data for persistence
#[derive(Debug, Clone)]
pub struct Operator {
    pub id: Uuid,
    pub username: Username,
    pub password_hash: String,
    pub full_name: String,
    pub is_active: bool,
}
