//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User's display name
    #[schema(example = "Alice")]
    pub name: String,
    /// User's email address
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Response envelope carrying an outcome message and the affected user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    /// Outcome message
    #[schema(example = "User added")]
    pub message: String,
    /// The created or updated user
    pub user: UserResponse,
}

impl UserEnvelope {
    pub fn new(message: &str, user: User) -> Self {
        Self {
            message: message.to_string(),
            user: user.into(),
        }
    }
}
