//! Session Middleware
//!
//! Opens the session for every request before it reaches a handler.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::AccountError;

/// Middleware state
#[derive(Clone)]
pub struct SessionMiddlewareState {
    pub store: Arc<dyn SessionStore>,
    pub config: Arc<AccountConfig>,
}

/// Load the session named by the session cookie into request extensions
pub async fn load_session(
    State(state): State<SessionMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let session = match state.store.load(token.as_deref()) {
        Ok(session) => session,
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(session);

    next.run(req).await
}

/// The session opened by [`load_session`]
///
/// Rejects with a 500 when the middleware is not installed.
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AccountError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| AccountError::Session("session middleware is not installed".to_string()))
    }
}
