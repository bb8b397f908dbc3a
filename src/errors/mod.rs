use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::ERR_INTERNAL;
use crate::models::ErrorResponse;

/// Error taxonomy for the API.
///
/// `NotFound` and `DuplicateEmail` are expected, user-facing conditions
/// mapped to 404/400 with a textual detail. `Store` wraps any database
/// fault and surfaces as an opaque 500.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    DuplicateEmail(String),
    Store(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::DuplicateEmail(message) => write!(f, "Bad Request: {}", message),
            ApiError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                detail: message.clone(),
            }),
            ApiError::DuplicateEmail(message) => HttpResponse::BadRequest().json(ErrorResponse {
                detail: message.clone(),
            }),
            ApiError::Store(err) => {
                // Logged server-side, never echoed to the client.
                error!("Database error: {}", err);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    detail: ERR_INTERNAL.to_string(),
                })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Store(err)
    }
}
