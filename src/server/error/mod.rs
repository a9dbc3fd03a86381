//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while the remaining
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 Unauthorized and
    /// 403 Forbidden mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected state indicating corrupt data or a bug.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A request field carried a value outside of its allowed set.
    ///
    /// Results in 400 Bad Request naming the rejected field.
    #[error("Invalid value '{value}' for field '{field}'")]
    Validation {
        /// Name of the rejected request field
        field: String,
        /// The value that was rejected
        value: String,
    },

    /// The request body is not JSON of the expected shape.
    ///
    /// Results in 400 Bad Request naming the body field the handler reads.
    #[error("Malformed request body for field '{field}': {detail}")]
    MalformedBody {
        /// Body field the handler requires
        field: String,
        /// Deserialization failure reported by the JSON extractor
        detail: String,
    },
}

impl AppError {
    /// Creates a validation error for the given request field and rejected value.
    pub fn validation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `MalformedBody`, with the field in the body
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: msg,
                    field: None,
                }),
            )
                .into_response(),
            Self::Validation { field, value } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Invalid value '{}' for field '{}'", value, field),
                    field: Some(field),
                }),
            )
                .into_response(),
            Self::MalformedBody { field, detail } => {
                tracing::debug!("Rejected request body: {}", detail);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("Malformed request body for field '{}'", field),
                        field: Some(field),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
