//! Application Configuration
//!
//! Configuration for the account application layer. Built once at startup
//! and shared read-only afterwards.

use std::time::Duration;

use crate::domain::entity::session::SESSION_KEY;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Key for signing session cookies (32 bytes)
    pub session_secret: [u8; 32],
    /// Session cookie lifetime after login (1 week)
    pub session_max_age: Duration,
    /// Whether to mark the session cookie Secure
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: SESSION_KEY.to_string(),
            session_secret: [0u8; 32],
            session_max_age: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AccountConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session cookie Max-Age in seconds
    pub fn session_max_age_secs(&self) -> i64 {
        self.session_max_age.as_secs() as i64
    }
}
