//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already exists";

// Store errors
pub const ERR_INTERNAL: &str = "Internal server error";
