//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for creating a user
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address, must not be held by any existing user
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Request payload for updating a user
///
/// Omitted fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Alice B.")]
    pub name: Option<String>,
    /// New email address, must not be held by another user
    #[schema(example = "alice@example.org")]
    pub email: Option<String>,
}
