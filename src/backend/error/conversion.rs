/**
 * Error Conversion
 *
 * Conversions from lower-level errors into `BackendError`, and the
 * `IntoResponse` implementation that turns a `BackendError` into a JSON
 * response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation failed",
 *   "status": 400,
 *   "errors": [{ "field": "email", "message": "Please include a valid email" }]
 * }
 * ```
 *
 * `errors` is only present for validation failures.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::shared::{FieldError, SharedError};

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { errors } => Self::Validation { errors },
            SharedError::AlreadyLiked => Self::AlreadyLiked,
            SharedError::NotLiked => Self::NotLiked,
            SharedError::CommentNotFound => Self::not_found("Comment does not exist"),
            SharedError::NotCommentAuthor => Self::forbidden("User not authorized"),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => Self::internal(format!("failed to sign token: {}", e)),
            TokenError::Lifetime(ttl) => Self::internal(format!("token lifetime too large: {:?}", ttl)),
            TokenError::Invalid(_) => Self::unauthenticated("Token is not valid"),
        }
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing failed: {}", err))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let mut body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if let Self::Validation { errors } = &self {
            body["errors"] = serde_json::json!(errors);
        }

        (status, Json(body)).into_response()
    }
}
