// Operator password hashing with bcrypt

use bcrypt::{hash, verify, DEFAULT_COST};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hashes a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, String> {
    hash(password, DEFAULT_COST).map_err(|e| e.to_string())
}

/// Checks a password against a stored bcrypt hash
///
/// # Example
/// ```
/// use cit_dispatch_api::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("vault-door-7").unwrap();
/// assert!(verify_password("vault-door-7", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}

/// Rejects passwords shorter than `MIN_PASSWORD_LEN` characters
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}
