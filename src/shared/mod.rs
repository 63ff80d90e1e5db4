//! Shared Module
//!
//! This module contains the types that cross layer boundaries: the JSON
//! documents returned by the API, the records handed to the stores and the
//! configuration every component is built from.
//!
//! # Overview
//!
//! The shared module has no dependency on Axum or on a database driver. All
//! types are designed for serialization and transmission over HTTP.

/// Public user profile
pub mod user;

/// Posts, likes and comments
pub mod post;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use user::UserProfile;
pub use post::{Comment, Like, Post};
pub use error::{FieldError, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
