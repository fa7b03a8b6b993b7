//! Signed Cookie Session Store
//!
//! Stateless store: the whole session lives in the cookie as
//! `<escaped user name>.<base64url HMAC-SHA256>`. Names are percent-escaped
//! only where cookie syntax requires it, and the signature covers the
//! escaped form. Nothing is kept server-side, so
//! "deleting" a session means telling the client to drop the cookie.

use platform::cookie::{CookieConfig, SameSite, decode_cookie_value, encode_cookie_value};
use platform::crypto;

use crate::application::config::AccountConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::{AccountError, AccountResult};

#[derive(Clone)]
pub struct SignedCookieStore {
    cookie_name: String,
    secret: [u8; 32],
    same_site: SameSite,
}

impl SignedCookieStore {
    pub fn new(cookie_name: impl Into<String>, secret: [u8; 32]) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            secret,
            same_site: SameSite::default(),
        }
    }

    pub fn from_config(config: &AccountConfig) -> Self {
        Self {
            cookie_name: config.session_cookie_name.clone(),
            secret: config.session_secret,
            same_site: config.cookie_same_site,
        }
    }

    fn encode(&self, value: &str) -> String {
        let escaped = encode_cookie_value(value);
        let signature = crypto::sign(&self.secret, escaped.as_bytes());
        format!("{}.{}", escaped, signature)
    }

    fn decode(&self, raw: &str) -> Option<String> {
        // Names may contain '.', the signature never does
        let (escaped, signature) = raw.rsplit_once('.')?;
        if escaped.is_empty() || !crypto::verify(&self.secret, escaped.as_bytes(), signature) {
            return None;
        }
        decode_cookie_value(escaped)
    }

    fn cookie_config(&self, session: &Session) -> CookieConfig {
        CookieConfig {
            name: session.name().to_string(),
            secure: session.options.secure,
            http_only: session.options.http_only,
            same_site: self.same_site,
            path: session.options.path.clone(),
            max_age_secs: Some(session.options.max_age),
        }
    }
}

impl SessionStore for SignedCookieStore {
    fn load(&self, cookie_value: Option<&str>) -> AccountResult<Session> {
        let Some(raw) = cookie_value.filter(|raw| !raw.is_empty()) else {
            return Ok(Session::new(&self.cookie_name));
        };

        match self.decode(raw) {
            Some(value) => Ok(Session::restore(&self.cookie_name, value)),
            None => {
                tracing::warn!("Session cookie failed verification, starting a new session");
                Ok(Session::new(&self.cookie_name))
            }
        }
    }

    fn save(&self, session: &Session) -> AccountResult<String> {
        let config = self.cookie_config(session);

        if session.is_deleted() {
            return Ok(config.build_delete_cookie());
        }

        let value = session
            .value()
            .ok_or_else(|| AccountError::Session("session has no value to save".to_string()))?;

        Ok(config.build_set_cookie(&self.encode(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::SESSION_KEY;

    fn store() -> SignedCookieStore {
        SignedCookieStore::new(SESSION_KEY, [9u8; 32])
    }

    fn logged_in(store: &SignedCookieStore, name: &str) -> String {
        let mut session = store.load(None).unwrap();
        session.options.max_age = 604800;
        session.set_value(name);
        store.save(&session).unwrap()
    }

    /// Cookie value part of a Set-Cookie header
    fn cookie_value(set_cookie: &str) -> &str {
        set_cookie
            .split(';')
            .next()
            .and_then(|pair| pair.split_once('='))
            .map(|(_, value)| value)
            .unwrap()
    }

    #[test]
    fn test_missing_cookie_gives_new_session() {
        let session = store().load(None).unwrap();
        assert!(session.is_new());
        assert!(session.value().is_none());

        let session = store().load(Some("")).unwrap();
        assert!(session.is_new());
    }

    #[test]
    fn test_save_then_load() {
        let store = store();
        let set_cookie = logged_in(&store, "john.doe");

        assert!(set_cookie.starts_with("session_id=john.doe."));
        assert!(set_cookie.contains("Max-Age=604800"));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Path=/"));

        let session = store.load(Some(cookie_value(&set_cookie))).unwrap();
        assert!(!session.is_new());
        assert_eq!(session.value(), Some("john.doe"));
    }

    #[test]
    fn test_tampered_cookie_gives_new_session() {
        let store = store();
        let set_cookie = logged_in(&store, "test01");
        let forged = cookie_value(&set_cookie).replacen("test01", "admin", 1);

        let session = store.load(Some(&forged)).unwrap();
        assert!(session.is_new());
        assert!(session.value().is_none());

        assert!(store.load(Some("test01")).unwrap().is_new());
        assert!(store.load(Some(".sig")).unwrap().is_new());
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let set_cookie = logged_in(&store(), "test01");
        let other = SignedCookieStore::new(SESSION_KEY, [8u8; 32]);
        assert!(other.load(Some(cookie_value(&set_cookie))).unwrap().is_new());
    }

    #[test]
    fn test_deleted_session_expires_cookie() {
        let store = store();
        let mut session = store.load(None).unwrap();
        session.invalidate();

        let set_cookie = store.save(&session).unwrap();
        assert!(set_cookie.starts_with("session_id=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_saving_empty_live_session_fails() {
        let store = store();
        let mut session = store.load(None).unwrap();
        session.options.max_age = 60;

        assert!(matches!(store.save(&session), Err(AccountError::Session(_))));
    }

    #[test]
    fn test_names_needing_escapes_round_trip() {
        let store = store();

        for name in ["John Smith", "José", "a;b,c", "100%"] {
            let set_cookie = logged_in(&store, name);
            let value = cookie_value(&set_cookie);
            assert!(!value.contains([' ', ';', ',']), "{value:?}");

            let session = store.load(Some(value)).unwrap();
            assert_eq!(session.value(), Some(name));
        }
    }

    #[test]
    fn test_escaped_name_cannot_be_swapped() {
        let store = store();
        let set_cookie = logged_in(&store, "José");
        let forged = cookie_value(&set_cookie).replacen("Jos%C3%A9", "Jos%C3%A8", 1);

        assert!(store.load(Some(&forged)).unwrap().is_new());
    }

    #[test]
    fn test_secure_flag_follows_options() {
        let store = store();
        let mut session = store.load(None).unwrap();
        session.options.max_age = 60;
        session.options.secure = true;
        session.set_value("test01");

        assert!(store.save(&session).unwrap().contains("Secure"));
    }
}
