use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::ActiveOperator;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::domain::operator::{Operator, Username};

/// Request body for operator registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub operator_id: Uuid,
    pub message: String,
}

/// Request body for operator login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub operator_id: Uuid,
}

/// Signed-in operator profile
#[derive(Debug, Serialize)]
pub struct OperatorResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
}

/// Register a new operator
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let username = Username::new(&req.username)
        .map_err(|e| ApiError::bad_request(format!("Invalid username: {}", e)))?;

    validate_password(&req.password).map_err(ApiError::bad_request)?;

    if req.full_name.trim().is_empty() {
        return Err(ApiError::bad_request("Full name cannot be empty"));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let operator = Operator {
        id: Uuid::new_v4(),
        username,
        password_hash,
        full_name: req.full_name.trim().to_string(),
        is_active: true,
    };

    let operator_id = state.operators.create(operator).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::bad_request("Username already registered")
        } else {
            ApiError::internal_server_error(format!("Failed to create operator: {}", e))
        }
    })?;

    tracing::info!(%operator_id, "Operator registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            operator_id,
            message: "Operator registered successfully".to_string(),
        }),
    ))
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username =
        Username::new(&req.username).map_err(|_| ApiError::unauthorized("Invalid credentials"))?;

    let operator = state
        .operators
        .find_by_username(&username)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !operator.is_active {
        return Err(ApiError::unauthorized("Account is disabled"));
    }

    let valid = verify_password(&req.password, &operator.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        tracing::warn!(username = %operator.username, "Failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    if let Err(e) = state.operators.update_last_login(operator.id).await {
        tracing::warn!(operator_id = %operator.id, "Could not record last login: {}", e);
    }

    let token = create_token(operator.id, operator.username.as_str(), &state.jwt_secret)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        operator_id: operator.id,
    }))
}

/// Profile of the operator owning the token
///
/// GET /api/auth/me
pub async fn me(
    ActiveOperator(operator): ActiveOperator,
) -> Result<Json<OperatorResponse>, ApiError> {
    Ok(Json(OperatorResponse {
        id: operator.id,
        username: operator.username.to_string(),
        full_name: operator.full_name,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
