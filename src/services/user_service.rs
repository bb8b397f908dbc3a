//! User service for user CRUD operations.

use std::sync::Arc;

use log::debug;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repositories::UserRepository;

/// Service layer between the HTTP handlers and the repository.
///
/// Email comparison is case-insensitive: every email is trimmed and
/// lowercased here before it reaches the repository, so the stored value is
/// always the normalized form.
pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Create a new UserService with a shared repository (for dependency injection).
    pub fn with_repository(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        let email = normalize_email(&req.email);
        debug!("Creating user with email: {}", email);
        self.repository.create(&req.name, &email).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.list_all().await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        self.repository.find_by_email(&normalize_email(email)).await
    }

    pub async fn update_user(&self, id: i64, req: UpdateUserRequest) -> Result<User, ApiError> {
        let email = req.email.as_deref().map(normalize_email);
        self.repository
            .update(id, req.name.as_deref(), email.as_deref())
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
