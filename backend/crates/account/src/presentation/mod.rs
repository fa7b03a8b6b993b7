//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and session middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountAppState;
pub use middleware::{CurrentSession, SessionMiddlewareState, load_session};
pub use router::{account_router, account_router_generic};
