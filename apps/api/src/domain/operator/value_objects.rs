use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 32;

/// Login name of a dashboard operator
///
/// # Invariants
/// - Stored trimmed and lowercased
/// - Between 3 and 32 characters
/// - Only ASCII letters, digits, `.`, `_` and `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Normalizes and validates a username
    ///
    /// # Example
    /// ```
    /// use cit_dispatch_api::domain::operator::Username;
    ///
    /// let username = Username::new("  Control.Room ").expect("valid username");
    /// assert_eq!(username.as_str(), "control.room");
    /// assert!(Username::new("no spaces").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, String> {
        let normalized = raw.as_ref().trim().to_ascii_lowercase();

        if normalized.len() < MIN_LEN || normalized.len() > MAX_LEN {
            return Err(format!(
                "Username must be {}-{} characters",
                MIN_LEN, MAX_LEN
            ));
        }

        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(format!("Username contains invalid character '{}'", bad));
        }

        Ok(Username(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
