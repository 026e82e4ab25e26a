use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The account exists but has been deactivated.
    #[error("User {0} is inactive")]
    UserInactive(i32),

    /// Username unknown or password mismatch. Both cases map to this variant.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user lacks a role required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized. The detailed reason is logged at debug level while
/// the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid username or password",
            Self::AccessDenied(_, _) => "You do not have permission to perform this action",
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::UserInactive(_) => {
                "Authentication required"
            }
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
