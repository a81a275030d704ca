use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Bearer <token>` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token does not match an unexpired session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is unknown or expired")]
    InvalidToken,

    /// The session points to a user that no longer exists or has been deactivated.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} of a valid session is missing or inactive")]
    UserNotInDatabase(i32),

    /// User lacks a permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// All errors are logged for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid or expired token".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(..) => {
                tracing::warn!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
