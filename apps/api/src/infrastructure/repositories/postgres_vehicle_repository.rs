use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::repositories::VehicleRepository;
use crate::domain::status::RecordStatus;
use crate::domain::vehicle::Vehicle;

/// PostgreSQL implementation of VehicleRepository
pub struct PostgresVehicleRepository {
    pool: PgPool,
}

impl PostgresVehicleRepository {
    /// Creates a new PostgresVehicleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VehicleRow {
    id: Uuid,
    registration: String,
    status: i16,
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn find_active(&self) -> Result<Vec<Vehicle>, String> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, registration, status
            FROM vehicles
            WHERE status = $1
            ORDER BY registration
            "#,
        )
        .bind(i16::from(RecordStatus::Active))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find active vehicles: {}", e))?;

        rows.into_iter()
            .map(|r| {
                RecordStatus::try_from(r.status).map(|status| Vehicle {
                    id: r.id,
                    registration: r.registration,
                    status,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Invalid vehicle record in database: {}", e))
    }
}
