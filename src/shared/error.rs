//! Shared Error Types
//!
//! This module defines error types raised by the shared model layer, before
//! any HTTP concern is involved.
//!
//! # Error Categories
//!
//! - `ValidationError` - Request validation failures, itemized per field
//! - `AlreadyLiked` / `NotLiked` - Like list preconditions
//! - `CommentNotFound` / `NotCommentAuthor` - Comment removal preconditions
//!
//! # Usage
//!
//! ```rust
//! use devconnect::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Text is required");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// A single failed check on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by the shared model layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// One or more request fields failed validation
    #[error("Validation failed: {} error(s)", errors.len())]
    ValidationError {
        /// Every violation found, ordered by field name
        errors: Vec<FieldError>,
    },

    /// The caller already appears in the like list
    #[error("Post already liked")]
    AlreadyLiked,

    /// The caller does not appear in the like list
    #[error("Post has not yet been liked")]
    NotLiked,

    /// No comment with the requested id exists on the post
    #[error("Comment does not exist")]
    CommentNotFound,

    /// The comment exists but belongs to someone else
    #[error("User not authorized")]
    NotCommentAuthor,
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut items: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                let field = field.to_string();
                failures.iter().map(move |failure| {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", failure.code));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();
        items.sort_by(|a, b| a.field.cmp(&b.field));
        Self::ValidationError { errors: items }
    }
}
