use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, HealthResponse, MessageResponse, UpdateUserRequest,
    UserEnvelope, UserResponse,
};

/// OpenAPI documentation for the User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "1.0.0",
        description = "A minimal REST API exposing create, read, update, and delete operations on users."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints (CRUD operations)")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::add_user,
        crate::handlers::get_users,
        crate::handlers::update_user,
        crate::handlers::delete_user
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserEnvelope,
            MessageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
