//! Success message constants used throughout the application.

// Health check status
pub const STATUS_BACKEND_RUNNING: &str = "Backend running";

// User management messages
pub const MSG_USER_ADDED: &str = "User added";
pub const MSG_USER_UPDATED: &str = "User updated";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
