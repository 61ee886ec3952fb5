use axum::{extract::State, Json};

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::staff::StaffMember;
use crate::domain::vehicle::Vehicle;

/// Active staff roster
///
/// GET /api/staff/active
pub async fn list_active_staff(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<StaffMember>>, ApiError> {
    let staff = state
        .staff
        .find_active()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(staff))
}

/// Active vehicle fleet
///
/// GET /api/vehicles/active
pub async fn list_active_vehicles(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let vehicles = state
        .vehicles
        .find_active()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(vehicles))
}
