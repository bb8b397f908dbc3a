use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User row stored in the `users` table.
///
/// `email` is unique across all rows at all times. The repository enforces
/// the invariant before every insert and update, with the unique index on
/// the column as the backstop under concurrent writers.
#[derive(Debug, Serialize, Deserialize, Clone, FromRow, ToSchema)]
pub struct User {
    /// Store-assigned identifier, immutable once created
    #[schema(example = 1)]
    pub id: i64,
    /// Display name, no uniqueness constraint
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address, stored lowercase
    #[schema(example = "alice@example.com")]
    pub email: String,
}
