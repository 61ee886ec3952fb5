use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::{ActiveOperator, JwtAuth};
use crate::api::state::AppState;
use crate::domain::allocation::{AllocatedTeam, TeamAllocator, TeamPlan};
use crate::domain::team::{Team, TeamDraft, TeamsToday};

/// Stored team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub member_ids: Vec<Uuid>,
    pub vehicle_ids: Vec<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            member_ids: team.member_ids().to_vec(),
            vehicle_ids: team.vehicle_ids().to_vec(),
            created_by: team.created_by(),
            created_at: team.created_at(),
        }
    }
}

/// Shuffled team with staff and vehicles resolved for display
#[derive(Debug, Serialize)]
pub struct AllocatedTeamResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub plan: TeamPlan,
}

impl From<AllocatedTeam> for AllocatedTeamResponse {
    fn from(allocated: AllocatedTeam) -> Self {
        Self {
            id: allocated.team.id(),
            created_at: allocated.team.created_at(),
            plan: allocated.plan,
        }
    }
}

/// Query string for listing teams by day
#[derive(Debug, Deserialize)]
pub struct TeamsByDateQuery {
    /// `YYYY-MM-DD`; defaults to the current business day
    pub date: Option<NaiveDate>,
}

/// Create a team from explicit member and vehicle ids
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    ActiveOperator(operator): ActiveOperator,
    Json(draft): Json<TeamDraft>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    draft.validate().map_err(ApiError::bad_request)?;

    let team = state
        .teams
        .create(&draft, Some(operator.id))
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

    tracing::info!(team_id = %team.id(), operator = %operator.username, "Team created manually");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Teams created on a day, oldest first
///
/// GET /api/teams?date=YYYY-MM-DD
pub async fn list_teams(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Query(query): Query<TeamsByDateQuery>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let date = query.date.unwrap_or_else(|| state.calendar.today());

    let teams = state
        .teams
        .find_created_on(date)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Whether teams were already created today
///
/// GET /api/teams/today
pub async fn teams_today(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<TeamsToday>, ApiError> {
    let allocator = TeamAllocator::new(
        state.staff.as_ref(),
        state.vehicles.as_ref(),
        state.teams.as_ref(),
    );

    let today = allocator.check_today(state.calendar.today()).await?;

    Ok(Json(today))
}

/// Build and store today's teams from the active roster
///
/// POST /api/teams/shuffle
pub async fn shuffle_teams(
    State(state): State<AppState>,
    ActiveOperator(operator): ActiveOperator,
) -> Result<(StatusCode, Json<Vec<AllocatedTeamResponse>>), ApiError> {
    let allocator = TeamAllocator::new(
        state.staff.as_ref(),
        state.vehicles.as_ref(),
        state.teams.as_ref(),
    );
    let mut rng = StdRng::from_os_rng();

    let today = state.calendar.today();

    tracing::info!(operator = %operator.username, %today, "Team shuffle requested");

    let allocated = allocator.shuffle(today, Some(operator.id), &mut rng).await?;

    let response = allocated
        .into_iter()
        .map(AllocatedTeamResponse::from)
        .collect();

    Ok((StatusCode::CREATED, Json(response)))
}
