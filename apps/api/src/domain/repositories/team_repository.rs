use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::team::{Team, TeamDraft};

/// Repository trait for Team aggregate
///
/// "Created on" a date means `created_at` falls within that business day
/// of the implementation's `BusinessCalendar`.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Validate and persist a new team, returning the stored record
    async fn create(&self, draft: &TeamDraft, created_by: Option<Uuid>) -> Result<Team, String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Count teams created on the given business day
    async fn count_created_on(&self, date: NaiveDate) -> Result<i64, String>;

    /// List teams created on the given business day, oldest first
    async fn find_created_on(&self, date: NaiveDate) -> Result<Vec<Team>, String>;
}
