//! API DTOs (Data Transfer Objects)
//!
//! Field names are the public wire contract (`birth_day`, not `birthDay`).

use serde::{Deserialize, Serialize};

use crate::application::{GetUserOutput, GetUsersOutput, LoginInput, SignUpInput};
use crate::domain::value_object::{birth_day::BirthDay, email::Email, user_name::UserName};
use crate::error::{AccountError, AccountResult};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request. Missing fields bind as empty and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub name: String,
    pub password: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub birth_day: String,
}

impl SignUpRequest {
    /// Required fields and shapes first, then the date format.
    pub fn into_input(self) -> AccountResult<SignUpInput> {
        let name = UserName::new(self.name)?;
        let password = required("password", self.password)?;
        let email = Email::new(self.email)?;
        let birth_day = required("birth_day", self.birth_day)?;
        let birth_day = BirthDay::parse(&birth_day)?;

        Ok(SignUpInput {
            name,
            password,
            email,
            birth_day,
        })
    }
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Users
// ============================================================================

/// Single user response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_day: String,
}

impl From<GetUserOutput> for UserResponse {
    fn from(output: GetUserOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            email: output.email,
            birth_day: output.birth_day,
        }
    }
}

/// User list response. `users` always serializes, as `[]` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

impl From<GetUsersOutput> for UsersResponse {
    fn from(output: GetUsersOutput) -> Self {
        Self {
            users: output.users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

impl LoginRequest {
    pub fn into_input(self) -> AccountResult<LoginInput> {
        Ok(LoginInput {
            name: required("name", self.name)?,
            password: required("password", self.password)?,
        })
    }
}

fn required(field: &str, value: String) -> AccountResult<String> {
    if value.is_empty() {
        return Err(AccountError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(value)
}
