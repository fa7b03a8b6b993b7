//! User Name Value Object
//!
//! The unique login handle. Any non-empty string is accepted; the session
//! cookie store escapes whatever cookie syntax cannot carry.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AppError::bad_request("name is required"));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["test01", "a", "john.doe", "John Smith", "José", "日本語"] {
            let user_name = UserName::new(name).unwrap();
            assert_eq!(user_name.as_str(), name);
        }
    }

    #[test]
    fn test_empty_name() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err.message(), "name is required");
    }
}
