//! Account Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{AuthInteractor, AuthUseCase, UserInteractor, UserUseCase};
use crate::domain::repository::SessionStore;
use crate::infra::cookie_store::SignedCookieStore;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{SessionMiddlewareState, load_session};

/// Create the account router backed by PostgreSQL
pub fn account_router(pool: PgPool, config: AccountConfig) -> Router {
    let repo = Arc::new(PgUserRepository::new(pool));

    account_router_generic(
        UserInteractor::new(repo.clone()),
        AuthInteractor::new(repo),
        config,
    )
}

/// Create the account router for any use case implementations
///
/// Logout is `POST` only.
pub fn account_router_generic<U, A>(user_use_case: U, auth_use_case: A, config: AccountConfig) -> Router
where
    U: UserUseCase + Send + Sync + 'static,
    A: AuthUseCase + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let session_store: Arc<dyn SessionStore> = Arc::new(SignedCookieStore::from_config(&config));

    let session_state = SessionMiddlewareState {
        store: session_store.clone(),
        config: config.clone(),
    };

    let state = AccountAppState {
        user_use_case: Arc::new(user_use_case),
        auth_use_case: Arc::new(auth_use_case),
        session_store,
        config,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<U, A>))
        .route("/users", get(handlers::get_users::<U, A>))
        .route("/users/{id}", get(handlers::get_user::<U, A>))
        .route("/login", post(handlers::login::<U, A>))
        .route("/logout", post(handlers::logout::<U, A>))
        .layer(middleware::from_fn_with_state(session_state, load_session))
        .with_state(state)
}
