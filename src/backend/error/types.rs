/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP API. Each variant is a
 * class of failure the client can act on, plus catch-alls for failures that
 * are the server's fault.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::FieldError;

/// Backend-specific error types
///
/// ```rust
/// use devconnect::backend::error::BackendError;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed input, itemized per field
    #[error("Validation failed")]
    Validation {
        errors: Vec<FieldError>,
    },

    /// Missing, invalid or expired token
    #[error("{message}")]
    Unauthenticated {
        message: String,
    },

    /// Authenticated, but not allowed to touch the target resource
    #[error("{message}")]
    Forbidden {
        message: String,
    },

    /// The target resource does not exist
    #[error("{message}")]
    NotFound {
        message: String,
    },

    /// Registration with an email that is already taken
    #[error("User already exists")]
    DuplicateUser,

    /// Unknown email or wrong password; deliberately the same error for both
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    /// Unclassified server-side failure
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::DuplicateUser
            | Self::InvalidCredentials
            | Self::AlreadyLiked
            | Self::NotLiked => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller
    ///
    /// Server-side failures collapse to "Server error"; their detail is only
    /// logged.
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } | Self::Store(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
