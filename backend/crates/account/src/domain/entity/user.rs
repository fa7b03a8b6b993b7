//! User Entity

use crate::domain::value_object::{
    birth_day::BirthDay, email::Email, user_id::UserId, user_name::UserName,
};

/// User entity
///
/// `id` is [`UserId::UNSET`] until storage assigns one; after that it
/// never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    /// Stored and compared as given
    password: String,
    email: Email,
    birth_day: BirthDay,
}

impl User {
    /// Create a user that has not been persisted yet
    pub fn new(name: UserName, password: String, email: Email, birth_day: BirthDay) -> Self {
        Self {
            id: UserId::UNSET,
            name,
            password,
            email,
            birth_day,
        }
    }

    /// Rebuild a persisted user
    pub fn restore(
        id: UserId,
        name: UserName,
        password: String,
        email: Email,
        birth_day: BirthDay,
    ) -> Self {
        Self {
            id,
            name,
            password,
            email,
            birth_day,
        }
    }

    /// Attach the storage-assigned id to a freshly created user
    pub fn with_id(self, id: UserId) -> Self {
        debug_assert!(!self.id.is_set(), "user id is immutable once assigned");
        Self { id, ..self }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn birth_day(&self) -> BirthDay {
        self.birth_day
    }

    /// Exact match on both name and password
    pub fn matches_credentials(&self, name: &str, password: &str) -> bool {
        self.name.as_str() == name && self.password == password
    }
}
