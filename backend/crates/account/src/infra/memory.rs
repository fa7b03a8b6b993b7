//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL repository, including uniqueness of
//! `name` and `email` and strictly increasing ids. Used by tests and for
//! running without a database.

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AccountError, AccountResult};

#[derive(Default)]
pub struct MemoryUserRepository {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    /// Kept in insertion order, which is also id order
    users: Vec<User>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for MemoryUserRepository {
    async fn exists_by_name(&self, name: &UserName) -> AccountResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.iter().any(|u| u.name() == name))
    }

    async fn create(&self, user: &User) -> AccountResult<User> {
        if user.id().is_set() {
            return Err(AccountError::Internal(format!(
                "user {} is already persisted",
                user.id()
            )));
        }

        let mut state = self.state.write().await;

        if state
            .users
            .iter()
            .any(|u| u.name() == user.name() || u.email() == user.email())
        {
            return Err(AccountError::UserAlreadyExists);
        }

        state.last_id += 1;
        let created = user.clone().with_id(UserId::new(state.last_id));
        state.users.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> AccountResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &UserName) -> AccountResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.name() == name).cloned())
    }

    async fn find_all(&self) -> AccountResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }
}
