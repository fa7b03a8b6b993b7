//! Auth Use Case
//!
//! Credential check only. Sessions belong to the presentation layer.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub name: String,
    pub password: String,
}

/// Auth use case trait
#[trait_variant::make(AuthUseCase: Send)]
pub trait LocalAuthUseCase {
    /// Succeeds when a stored user matches both name and password exactly;
    /// otherwise `LoginFailed`.
    async fn login(&self, input: LoginInput) -> AccountResult<()>;
}

/// Repository-backed [`AuthUseCase`]
pub struct AuthInteractor<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> AuthInteractor<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

impl<R> AuthUseCase for AuthInteractor<R>
where
    R: UserRepository + Send + Sync,
{
    async fn login(&self, input: LoginInput) -> AccountResult<()> {
        // A name that could never have been registered cannot match
        let name = UserName::new(input.name).map_err(|_| AccountError::LoginFailed)?;

        let user = self
            .user_repo
            .find_by_name(&name)
            .await?
            .ok_or(AccountError::LoginFailed)?;

        if !user.matches_credentials(name.as_str(), &input.password) {
            return Err(AccountError::LoginFailed);
        }

        tracing::info!(user_id = %user.id(), name = %name, "User logged in");

        Ok(())
    }
}
