use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{auth, roster, teams};
use crate::api::state::AppState;

/// All API routes bound to `state`
///
/// Cross-cutting layers (CORS, request tracing) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Roster routes
        .route("/api/staff/active", get(roster::list_active_staff))
        .route("/api/vehicles/active", get(roster::list_active_vehicles))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/today", get(teams::teams_today))
        .route("/api/teams/shuffle", post(teams::shuffle_teams))
        .route("/api/teams/:id", get(teams::get_team))
        .with_state(state)
}
