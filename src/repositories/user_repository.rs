//! User repository for all SQL operations against the `users` table.
//!
//! This repository encapsulates all database access logic for users,
//! providing a clean interface for the service layer. It is the only place
//! that enforces the duplicate-email invariant: the uniqueness check and the
//! mutating statement run inside a single transaction, and the unique index
//! on `email` catches the residual race between concurrent transactions.

use log::{debug, info};
use sqlx::SqlitePool;

use crate::constants::{ERR_EMAIL_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist.
    ///
    /// This method should be called once during application startup. The
    /// unique index on `email` is the schema-level backstop for the
    /// duplicate-email invariant.
    pub async fn ensure_schema(&self) -> Result<(), ApiError> {
        info!("Ensuring users table exists...");

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                name  TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a user by email address.
    ///
    /// Emails are stored lowercase; callers pass a normalized value
    /// (see `UserService`).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", email);
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by id: {}", id);
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// List all users in store order.
    pub async fn list_all(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Insert a new user and return it with its store-assigned id.
    ///
    /// Fails with `DuplicateEmail` if the email is already taken.
    pub async fn create(&self, name: &str, email: &str) -> Result<User, ApiError> {
        let mut tx = self.pool.begin().await?;

        let existing =
            sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_some() {
            return Err(ApiError::DuplicateEmail(ERR_EMAIL_EXISTS.to_string()));
        }

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES (?, ?) RETURNING id, name, email",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await?;
        Ok(user)
    }

    /// Apply a partial update to a user and return the updated row.
    ///
    /// Fails with `NotFound` if `id` does not exist and with `DuplicateEmail`
    /// if the new email is already held by a different user. Fields passed as
    /// `None` are left untouched.
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, ApiError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

        if let Some(new_email) = email {
            if new_email != current.email {
                let taken = sqlx::query_as::<_, User>(
                    "SELECT id, name, email FROM users WHERE email = ? AND id != ?",
                )
                .bind(new_email)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
                if taken.is_some() {
                    return Err(ApiError::DuplicateEmail(ERR_EMAIL_EXISTS.to_string()));
                }
            }
        }

        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, email = ? WHERE id = ? RETURNING id, name, email",
        )
        .bind(name.unwrap_or(&current.name))
        .bind(email.unwrap_or(&current.email))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await?;
        Ok(user)
    }

    /// Delete a user permanently.
    ///
    /// Fails with `NotFound` if `id` does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        debug!("Repository: Deleting user: {}", id);
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

/// Translate a unique-index violation raised by a concurrent writer into
/// `DuplicateEmail`; any other failure stays a store error.
fn map_unique_violation(err: sqlx::Error) -> ApiError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            ApiError::DuplicateEmail(ERR_EMAIL_EXISTS.to_string())
        }
        _ => ApiError::Store(err),
    }
}
