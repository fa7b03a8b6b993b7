//! User Use Case
//!
//! Sign-up and user reads.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    birth_day::BirthDay, email::Email, user_id::UserId, user_name::UserName,
};
use crate::error::{AccountError, AccountResult};

/// Sign up input (already validated by the presentation layer)
pub struct SignUpInput {
    pub name: UserName,
    pub password: String,
    pub email: Email,
    pub birth_day: BirthDay,
}

/// Sign up output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub id: i64,
    pub name: String,
}

/// Get user input
pub struct GetUserInput {
    pub id: UserId,
}

/// One user as exposed to callers. `birth_day` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserOutput {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_day: String,
}

impl From<&User> for GetUserOutput {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            birth_day: user.birth_day().to_string(),
        }
    }
}

/// Get users output. `users` is empty, never absent, when nothing is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUsersOutput {
    pub users: Vec<GetUserOutput>,
}

/// User use case trait
#[trait_variant::make(UserUseCase: Send)]
pub trait LocalUserUseCase {
    /// Register a new user. Fails with `UserAlreadyExists` on a duplicate name.
    async fn sign_up(&self, input: SignUpInput) -> AccountResult<SignUpOutput>;

    /// Fetch one user. Fails with `UserNotFound` when absent.
    async fn get_user(&self, input: GetUserInput) -> AccountResult<GetUserOutput>;

    /// Fetch every user
    async fn get_users(&self) -> AccountResult<GetUsersOutput>;
}

/// Repository-backed [`UserUseCase`]
pub struct UserInteractor<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UserInteractor<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

impl<R> UserUseCase for UserInteractor<R>
where
    R: UserRepository + Send + Sync,
{
    async fn sign_up(&self, input: SignUpInput) -> AccountResult<SignUpOutput> {
        // Fast path only. Two concurrent sign-ups can both pass this check;
        // the repository turns the loser's unique violation into the same error.
        if self.user_repo.exists_by_name(&input.name).await? {
            return Err(AccountError::UserAlreadyExists);
        }

        let user = User::new(input.name, input.password, input.email, input.birth_day);
        let created = self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %created.id(),
            name = %created.name(),
            "User signed up"
        );

        Ok(SignUpOutput {
            id: created.id().get(),
            name: created.name().to_string(),
        })
    }

    async fn get_user(&self, input: GetUserInput) -> AccountResult<GetUserOutput> {
        let user = self
            .user_repo
            .find_by_id(input.id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        Ok(GetUserOutput::from(&user))
    }

    async fn get_users(&self) -> AccountResult<GetUsersOutput> {
        let users = self.user_repo.find_all().await?;

        Ok(GetUsersOutput {
            users: users.iter().map(GetUserOutput::from).collect(),
        })
    }
}
