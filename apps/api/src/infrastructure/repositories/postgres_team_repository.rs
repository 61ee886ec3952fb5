use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::calendar::BusinessCalendar;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamDraft};

/// PostgreSQL implementation of TeamRepository
///
/// Member and vehicle ids live in `UUID[]` columns so their order survives
/// the round trip. Day queries are answered in the business calendar.
pub struct PostgresTeamRepository {
    pool: PgPool,
    calendar: BusinessCalendar,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    /// * `calendar` - Business calendar that defines a day
    pub fn new(pool: PgPool, calendar: BusinessCalendar) -> Self {
        Self { pool, calendar }
    }
}

#[derive(FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    member_ids: Vec<Uuid>,
    vehicle_ids: Vec<Uuid>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(
            r.id,
            r.name,
            r.member_ids,
            r.vehicle_ids,
            r.created_by,
            r.created_at,
        )
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, draft: &TeamDraft, created_by: Option<Uuid>) -> Result<Team, String> {
        let team = Team::from_draft(draft, created_by)?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, member_ids, vehicle_ids, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.member_ids())
        .bind(team.vehicle_ids())
        .bind(team.created_by())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, member_ids, vehicle_ids, created_by, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(Team::from))
    }

    async fn count_created_on(&self, date: NaiveDate) -> Result<i64, String> {
        let (start, end) = self.calendar.day_bounds(date);

        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM teams
            WHERE created_at >= $1 AND created_at < $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Failed to count teams for {}: {}", date, e))
    }

    async fn find_created_on(&self, date: NaiveDate) -> Result<Vec<Team>, String> {
        let (start, end) = self.calendar.day_bounds(date);

        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, member_ids, vehicle_ids, created_by, created_at
            FROM teams
            WHERE created_at >= $1 AND created_at < $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teams for {}: {}", date, e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}
