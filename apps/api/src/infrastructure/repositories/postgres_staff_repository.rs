use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::repositories::StaffRepository;
use crate::domain::staff::{StaffMember, StaffRole};
use crate::domain::status::RecordStatus;

/// PostgreSQL implementation of StaffRepository
pub struct PostgresStaffRepository {
    pool: PgPool,
}

impl PostgresStaffRepository {
    /// Creates a new PostgresStaffRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StaffRow {
    id: Uuid,
    name: String,
    role: String,
    status: i16,
}

impl TryFrom<StaffRow> for StaffMember {
    type Error = String;

    fn try_from(r: StaffRow) -> Result<Self, Self::Error> {
        Ok(StaffMember {
            id: r.id,
            name: r.name,
            role: StaffRole::from(r.role),
            status: RecordStatus::try_from(r.status)?,
        })
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn find_active(&self) -> Result<Vec<StaffMember>, String> {
        let rows = sqlx::query_as::<_, StaffRow>(
            r#"
            SELECT id, name, role, status
            FROM staff
            WHERE status = $1
            ORDER BY name
            "#,
        )
        .bind(i16::from(RecordStatus::Active))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find active staff: {}", e))?;

        rows.into_iter()
            .map(StaffMember::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Invalid staff record in database: {}", e))
    }
}
