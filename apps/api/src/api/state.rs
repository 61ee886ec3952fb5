use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::calendar::BusinessCalendar;
use crate::domain::repositories::{
    OperatorRepository, StaffRepository, TeamRepository, VehicleRepository,
};
use crate::infrastructure::repositories::{
    PostgresOperatorRepository, PostgresStaffRepository, PostgresTeamRepository,
    PostgresVehicleRepository,
};

/// Shared handler state
///
/// Repositories sit behind trait objects so the router can run against
/// PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub staff: Arc<dyn StaffRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub operators: Arc<dyn OperatorRepository>,
    pub jwt_secret: Arc<str>,
    pub calendar: BusinessCalendar,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, jwt_secret: &str, calendar: BusinessCalendar) -> Self {
        Self {
            staff: Arc::new(PostgresStaffRepository::new(pool.clone())),
            vehicles: Arc::new(PostgresVehicleRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool.clone(), calendar)),
            operators: Arc::new(PostgresOperatorRepository::new(pool)),
            jwt_secret: Arc::from(jwt_secret),
            calendar,
        }
    }
}
