//! User management handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::{MSG_USER_ADDED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::errors::ApiError;
use crate::models::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserEnvelope, UserResponse,
};
use crate::services::UserService;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserEnvelope),
        (status = 400, description = "Email already exists", body = crate::models::ErrorResponse)
    )
)]
pub async fn add_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(payload.into_inner()).await?;
    info!("Created user {} ({})", user.id, user.email);
    Ok(HttpResponse::Ok().json(UserEnvelope::new(MSG_USER_ADDED, user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse])
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_users().await?;
    debug!("Fetched {} users", users.len());

    let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// Update a user's name and/or email
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Email already exists", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Updating user with id: {}", user_id);

    let user = user_service
        .update_user(user_id, payload.into_inner())
        .await?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(UserEnvelope::new(MSG_USER_UPDATED, user)))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Deleting user with id: {}", user_id);

    user_service.delete_user(user_id).await?;

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_DELETED)))
}
