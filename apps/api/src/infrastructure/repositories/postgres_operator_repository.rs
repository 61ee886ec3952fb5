use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::operator::{Operator, Username};
use crate::domain::repositories::OperatorRepository;

/// PostgreSQL implementation of OperatorRepository
pub struct PostgresOperatorRepository {
    pool: PgPool,
}

impl PostgresOperatorRepository {
    /// Creates a new PostgresOperatorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OperatorRow {
    id: Uuid,
    username: String,
    password_hash: String,
    full_name: String,
    is_active: bool,
}

impl TryFrom<OperatorRow> for Operator {
    type Error = String;

    fn try_from(r: OperatorRow) -> Result<Self, Self::Error> {
        Ok(Operator {
            id: r.id,
            username: Username::new(&r.username)
                .map_err(|e| format!("Invalid username from database: {}", e))?,
            password_hash: r.password_hash,
            full_name: r.full_name,
            is_active: r.is_active,
        })
    }
}

#[async_trait]
impl OperatorRepository for PostgresOperatorRepository {
    async fn create(&self, operator: Operator) -> Result<Uuid, String> {
        sqlx::query(
            r#"
            INSERT INTO operators (id, username, password_hash, full_name, is_active)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(operator.id)
        .bind(operator.username.as_str())
        .bind(&operator.password_hash)
        .bind(&operator.full_name)
        .bind(operator.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create operator: {}", e))?;

        Ok(operator.id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Operator>, String> {
        sqlx::query_as::<_, OperatorRow>(
            r#"
            SELECT id, username, password_hash, full_name, is_active
            FROM operators
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find operator by id: {}", e))?
        .map(Operator::try_from)
        .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Operator>, String> {
        sqlx::query_as::<_, OperatorRow>(
            r#"
            SELECT id, username, password_hash, full_name, is_active
            FROM operators
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find operator by username: {}", e))?
        .map(Operator::try_from)
        .transpose()
    }

    async fn update_last_login(&self, operator_id: Uuid) -> Result<(), String> {
        sqlx::query(
            r#"
            UPDATE operators
            SET last_login = NOW(), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(operator_id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update last login: {}", e))?;

        Ok(())
    }
}
