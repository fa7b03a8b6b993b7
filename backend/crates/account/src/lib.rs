//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and session-store traits
//! - `application/` - User and auth use cases, configuration
//! - `infra/` - PostgreSQL and in-memory repositories, signed cookie store
//! - `presentation/` - HTTP handlers, DTOs, router, session middleware
//!
//! ## Endpoints
//! - `POST /signup` - register a user
//! - `GET /users/{id}`, `GET /users` - read users
//! - `POST /login` - check credentials and set the `session_id` cookie
//! - `POST /logout` - expire the `session_id` cookie
//!
//! ## Session Model
//! - The cookie value is the user name plus an HMAC-SHA256 signature
//! - Nothing is stored server-side; logout tells the client to drop the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::{MemoryUserRepository, PgUserRepository, SignedCookieStore};
pub use presentation::router::{account_router, account_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
