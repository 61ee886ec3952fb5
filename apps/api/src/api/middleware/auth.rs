use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::{verify_token, Claims};
use crate::domain::operator::Operator;

/// Bearer-token extractor for protected routes
///
/// Rejects with 401 when the header is missing, malformed, or the token
/// fails verification against the configured secret.
///
/// ```rust,ignore
/// async fn protected_handler(JwtAuth(claims): JwtAuth) -> String {
///     format!("Hello {}", claims.username)
/// }
/// ```
pub struct JwtAuth(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.jwt_secret)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(JwtAuth(claims))
    }
}

/// Bearer-token extractor that also requires the operator to still be active
///
/// Tokens outlive account changes, so routes that change state look the
/// operator up again instead of trusting the signature alone.
pub struct ActiveOperator(pub Operator);

#[async_trait]
impl FromRequestParts<AppState> for ActiveOperator {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;

        let operator = state
            .operators
            .find_by_id(claims.sub)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
            .filter(|operator| operator.is_active)
            .ok_or_else(|| {
                tracing::warn!(operator_id = %claims.sub, "Token presented for inactive operator");
                ApiError::unauthorized("Operator no longer active")
            })?;

        Ok(ActiveOperator(operator))
    }
}
