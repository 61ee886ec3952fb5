use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::domain::allocation::AllocationError;

/// API error type with HTTP status code and message
///
/// Serialized as `{"error": message}`, with any `details` fields merged in.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches extra JSON fields to the response body
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.message
        });

        if let (Some(Value::Object(extra)), Some(map)) = (self.details, body.as_object_mut()) {
            map.extend(extra);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<AllocationError> for ApiError {
    fn from(err: AllocationError) -> Self {
        let message = err.to_string();
        match err {
            AllocationError::GuardViolation { team_count } => {
                Self::conflict(message).with_details(json!({ "team_count": team_count }))
            }
            AllocationError::InsufficientVehicles { active } => {
                Self::unprocessable(message).with_details(json!({ "active_vehicles": active }))
            }
            AllocationError::InsufficientStaff => Self::unprocessable(message),
            AllocationError::PersistenceFailure { created, .. } => {
                let created_team_ids: Vec<String> =
                    created.iter().map(|t| t.id().to_string()).collect();
                Self::internal_server_error(message)
                    .with_details(json!({ "created_team_ids": created_team_ids }))
            }
            AllocationError::Lookup(_) => Self::internal_server_error(message),
        }
    }
}
