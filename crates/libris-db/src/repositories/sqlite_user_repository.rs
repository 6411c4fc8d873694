//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use libris_core::{NewUser, RepositoryError, User, UserRepository};

use super::map_sqlx_error;
use super::row_mappers::{USER_SELECT_COLUMNS, row_to_user};

/// `SQLite` implementation of the `UserRepository` trait.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new `SQLite` user repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE username = ?");

        sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .as_ref()
            .map(row_to_user)
            .transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
        })
    }
}
