// Bearer tokens for dashboard operators
// HS256, valid for one shift (8 hours)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime in hours
pub const TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Operator ID (subject)
    pub sub: Uuid,
    /// Operator username, for log lines and the dashboard header
    pub username: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Issues a signed token for an operator
///
/// # Example
/// ```
/// use cit_dispatch_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let operator_id = Uuid::new_v4();
/// let token = create_token(operator_id, "control.room", "secret").expect("valid token");
///
/// let claims = verify_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, operator_id);
/// assert_eq!(claims.username, "control.room");
/// ```
pub fn create_token(operator_id: Uuid, username: &str, secret: &str) -> Result<String, String> {
    let now = Utc::now();
    let claims = Claims {
        sub: operator_id,
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies signature and expiry, returning the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
