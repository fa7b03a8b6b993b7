//! Application Layer
//!
//! Use cases and application services.

pub mod auth;
pub mod config;
pub mod user;

// Re-exports
pub use auth::{AuthInteractor, AuthUseCase, LoginInput};
pub use config::AccountConfig;
pub use user::{
    GetUserInput, GetUserOutput, GetUsersOutput, SignUpInput, SignUpOutput, UserInteractor,
    UserUseCase,
};
