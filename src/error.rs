//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Every failure a handler or service can report is one of its
//! variants, and each variant maps to a fixed HTTP status with a JSON body of
//! the form `{"error": "<reason>"}`. The reason strings are short and stable
//! so clients can match on them; human-readable messaging is a client concern.
//!
//! `AppError` implements `actix_web::error::ResponseError`, and `From`
//! implementations for `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError` let handlers and
//! services use the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// A required field is missing or empty (HTTP 400).
    BadRequest(String),
    /// Authentication failed or is required but missing (HTTP 401).
    Unauthorized(String),
    /// The requested resource does not exist for this caller (HTTP 404).
    /// A task owned by another user is reported exactly like a nonexistent one.
    NotFound(String),
    /// The request conflicts with existing state, e.g. a duplicate email at
    /// registration (HTTP 409).
    Conflict(String),
    /// Input failed format validation (HTTP 422 Unprocessable Entity).
    /// Wraps errors from the `validator` crate.
    ValidationError(String),
    /// An unexpected server-side failure, e.g. password hashing or token
    /// signing going wrong (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This lets Actix Web translate `AppError` results from handlers (and from
/// the auth middleware) into the correct status codes and JSON error bodies.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
///
/// Any JWT processing failure (malformed token, bad signature, expiry) is an
/// authorization failure from the caller's point of view.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized("Invalid token".into())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::BadRequest("Title is required".into());
        let response = error.error_response();
        assert_eq!(response.status(), 400);

        let error = AppError::Unauthorized("Invalid credentials".into());
        let response = error.error_response();
        assert_eq!(response.status(), 401);

        let error = AppError::NotFound("Todo not found".into());
        let response = error.error_response();
        assert_eq!(response.status(), 404);

        let error = AppError::Conflict("User already exists".into());
        let response = error.error_response();
        assert_eq!(response.status(), 409);

        let error = AppError::InternalServerError("Server error".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_jwt_error_maps_to_unauthorized() {
        let jwt_error = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::InvalidToken,
        );
        match AppError::from(jwt_error) {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Invalid token"),
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }
}
