//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{AuthUseCase, GetUserInput, UserUseCase};
use crate::domain::entity::session::SessionOptions;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    LoginRequest, SignUpRequest, SignUpResponse, UserResponse, UsersResponse,
};
use crate::presentation::middleware::CurrentSession;

/// Shared state for account handlers
pub struct AccountAppState<U, A>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    pub user_use_case: Arc<U>,
    pub auth_use_case: Arc<A>,
    pub session_store: Arc<dyn SessionStore>,
    pub config: Arc<AccountConfig>,
}

// Manual impl: deriving would demand `U: Clone` and `A: Clone`.
impl<U, A> Clone for AccountAppState<U, A>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            user_use_case: self.user_use_case.clone(),
            auth_use_case: self.auth_use_case.clone(),
            session_store: self.session_store.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<U, A>(
    State(state): State<AccountAppState<U, A>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AccountResult<(StatusCode, Json<SignUpResponse>)>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;
    let input = req.into_input()?;

    let output = state.user_use_case.sign_up(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            id: output.id,
            name: output.name,
        }),
    ))
}

// ============================================================================
// Users
// ============================================================================

/// GET /users/{id}
pub async fn get_user<U, A>(
    State(state): State<AccountAppState<U, A>>,
    id: Result<Path<i64>, PathRejection>,
) -> AccountResult<Json<UserResponse>>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let Path(id) = id.map_err(AppError::from)?;
    if id < 1 {
        return Err(AccountError::InvalidRequest(format!(
            "id must be at least 1, got {}",
            id
        )));
    }

    let output = state
        .user_use_case
        .get_user(GetUserInput {
            id: UserId::new(id),
        })
        .await?;

    Ok(Json(UserResponse::from(output)))
}

/// GET /users
pub async fn get_users<U, A>(
    State(state): State<AccountAppState<U, A>>,
) -> AccountResult<Json<UsersResponse>>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let output = state.user_use_case.get_users().await?;

    Ok(Json(UsersResponse::from(output)))
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /login
///
/// On success the session cookie carries the user name for one week.
pub async fn login<U, A>(
    State(state): State<AccountAppState<U, A>>,
    CurrentSession(mut session): CurrentSession,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AccountResult<impl IntoResponse>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;
    let input = req.into_input()?;
    let name = input.name.clone();

    state.auth_use_case.login(input).await?;

    if !session.is_new() {
        tracing::debug!(previous = ?session.value(), "Replacing existing session");
    }

    session.options = SessionOptions {
        path: "/".to_string(),
        max_age: state.config.session_max_age_secs(),
        http_only: true,
        secure: state.config.cookie_secure,
    };
    session.set_value(name);

    let cookie = state.session_store.save(&session)?;

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)]))
}

/// POST /logout
///
/// Always answers 204, whether or not a session was presented.
pub async fn logout<U, A>(
    State(state): State<AccountAppState<U, A>>,
    CurrentSession(mut session): CurrentSession,
) -> AccountResult<impl IntoResponse>
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let name = session.value().map(str::to_owned);

    session.invalidate();
    session.options.path = "/".to_string();
    session.options.http_only = true;
    session.options.secure = state.config.cookie_secure;

    let cookie = state.session_store.save(&session)?;

    match name {
        Some(name) => tracing::info!(name = %name, "User logged out"),
        None => tracing::debug!("Logout without an active session"),
    }

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}
