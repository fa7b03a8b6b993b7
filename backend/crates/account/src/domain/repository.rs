//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AccountResult;

/// User repository trait
///
/// Absence is `Ok(None)`, never an error.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Check if a user with this name exists
    async fn exists_by_name(&self, name: &UserName) -> AccountResult<bool>;

    /// Persist a new user and return it with its assigned id.
    ///
    /// A name or email uniqueness violation is `AccountError::UserAlreadyExists`.
    async fn create(&self, user: &User) -> AccountResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AccountResult<Option<User>>;

    /// Find user by name
    async fn find_by_name(&self, name: &UserName) -> AccountResult<Option<User>>;

    /// All users, ordered by id
    async fn find_all(&self) -> AccountResult<Vec<User>>;
}

/// Cookie-backed session store
pub trait SessionStore: Send + Sync {
    /// Open the session for a raw cookie value. A missing or unverifiable
    /// cookie yields a fresh session.
    fn load(&self, cookie_value: Option<&str>) -> AccountResult<Session>;

    /// Persist the session and return the `Set-Cookie` header value.
    /// Sessions with `max_age <= 0` produce a deletion cookie.
    fn save(&self, session: &Session) -> AccountResult<String>;
}
