//! PostgreSQL Repository Implementation

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    birth_day::BirthDay, email::Email, user_id::UserId, user_name::UserName,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn exists_by_name(&self, name: &UserName) -> AccountResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE name = $1)")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn create(&self, user: &User) -> AccountResult<User> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (
                name,
                password,
                email,
                birth_day
            ) VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user.name().as_str())
        .bind(user.password())
        .bind(user.email().as_str())
        .bind(user.birth_day().date())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(user.clone().with_id(UserId::new(id)))
    }

    async fn find_by_id(&self, id: UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                name,
                password,
                email,
                birth_day
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_name(&self, name: &UserName) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                name,
                password,
                email,
                birth_day
            FROM users
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_all(&self) -> AccountResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                name,
                password,
                email,
                birth_day
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

/// Unique violations on `name` or `email` mean the user already exists
fn map_insert_error(err: sqlx::Error) -> AccountError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::debug!(
                constraint = db_err.constraint().unwrap_or("unknown"),
                "Unique constraint rejected new user"
            );
            AccountError::UserAlreadyExists
        }
        _ => AccountError::Database(err),
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    password: String,
    email: String,
    birth_day: NaiveDate,
}

impl UserRow {
    fn into_user(self) -> User {
        User::restore(
            UserId::new(self.id),
            UserName::from_db(self.name),
            self.password,
            Email::from_db(self.email),
            BirthDay::new(self.birth_day),
        )
    }
}
