use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Token is malformed, expired or signed with a different secret.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token is valid but its subject no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// A permission check ran without an authenticated identity.
    ///
    /// Results in a 401 Unauthorized response, never 403.
    #[error("Permission check without an authenticated identity")]
    MissingIdentity,

    /// Authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every credential problem maps to the same 401 body and every permission problem to the
/// same 403 body. Details are logged at debug level only.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or orphaned credential
/// - 403 Forbidden - Valid credential without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::AccessDenied(..) => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::UserNotInDatabase(_)
            | Self::MissingIdentity => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
