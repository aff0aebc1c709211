//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod field;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, field::FieldError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion so services and controllers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup. Results in 500 Internal Server Error if it ever reaches a
    /// request handler.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Write request rejected by the key check.
    ///
    /// Delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Domain validation failure.
    ///
    /// Results in 400 Bad Request with the field error's explanation as the message.
    #[error(transparent)]
    FieldErr(#[from] FieldError),

    /// Database operation error from SeaORM.
    ///
    /// Covers an unavailable or closed storage connection as well as failing queries.
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error while reaching the key authority.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, typically from binding the listen socket at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with an empty body. The message is only logged.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Maps a write that hit a unique index to the validation error the matching
    /// application-level check would have raised.
    ///
    /// Any other database error is kept as `DbErr`.
    pub fn from_conflict(err: sea_orm::DbErr, conflict: impl FnOnce() -> FieldError) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => conflict().into(),
            _ => err.into(),
        }
    }
}

/// Maps request bodies that could not be read as JSON to 400 Bad Request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Validation errors carry a `{"message": ...}` body; not-found and internal errors
/// carry no body. Internal errors are logged with full details.
///
/// # Returns
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 400 Bad Request - For `FieldErr` and `BadRequest` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::FieldErr(err) => {
                tracing::debug!("Validation failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        message: err.explanation,
                    }),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message: msg })).into_response()
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns an empty 500 response to avoid leaking
/// implementation details. Used as a fallback for errors that don't have specific HTTP
/// response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
