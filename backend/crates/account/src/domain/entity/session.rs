//! Session Entity
//!
//! Login state carried by the session cookie. The only payload is the
//! authenticated user name; everything else lives in the cookie store.

/// Cookie name and the key the user name is stored under
pub const SESSION_KEY: &str = "session_id";

/// Cookie attributes applied when the session is saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub path: String,
    /// Seconds. `<= 0` instructs the store to delete the cookie.
    pub max_age: i64,
    pub http_only: bool,
    pub secure: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            max_age: 0,
            http_only: true,
            secure: false,
        }
    }
}

/// Session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    value: Option<String>,
    pub options: SessionOptions,
    is_new: bool,
}

impl Session {
    /// A session the client did not present (or presented a bad cookie for)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            options: SessionOptions::default(),
            is_new: true,
        }
    }

    /// A session decoded from a valid cookie
    pub fn restore(name: impl Into<String>, value: String) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            options: SessionOptions::default(),
            is_new: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authenticated user name, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Store the authenticated user name, overwriting any previous login
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Mark the session for deletion on the next save
    pub fn invalidate(&mut self) {
        self.options.max_age = -1;
        self.value = None;
    }

    pub fn is_deleted(&self) -> bool {
        self.options.max_age <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(SESSION_KEY);
        assert_eq!(session.name(), "session_id");
        assert!(session.value().is_none());
        assert!(session.is_new());
    }

    #[test]
    fn test_set_value_overwrites() {
        let mut session = Session::restore(SESSION_KEY, "test01".to_string());
        assert!(!session.is_new());
        session.set_value("test02");
        assert_eq!(session.value(), Some("test02"));
    }

    #[test]
    fn test_invalidate() {
        let mut session = Session::restore(SESSION_KEY, "test01".to_string());
        session.options.max_age = 604800;
        assert!(!session.is_deleted());

        session.invalidate();
        assert!(session.is_deleted());
        assert_eq!(session.options.max_age, -1);
        assert!(session.value().is_none());
    }
}
