use actix_web::{web, HttpResponse};

use crate::constants::STATUS_BACKEND_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/", web::get().to(health_check))
        .service(
            web::scope("/users")
                // Create a new user
                .route("", web::post().to(handlers::add_user))
                // List all users
                .route("", web::get().to(handlers::get_users))
                // Update user name and/or email
                .route("/{user_id}", web::put().to(handlers::update_user))
                // Delete user account
                .route("/{user_id}", web::delete().to(handlers::delete_user)),
        );
}

/// Health check
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Backend is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: STATUS_BACKEND_RUNNING.to_string(),
    })
}
