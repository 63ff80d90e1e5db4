//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and the
//! middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and status mapping
//! └── conversion.rs - From impls and IntoResponse
//! ```
//!
//! # Error Classes
//!
//! | Variant              | Status |
//! |----------------------|--------|
//! | `Validation`         | 400    |
//! | `DuplicateUser`      | 400    |
//! | `InvalidCredentials` | 400    |
//! | `AlreadyLiked`       | 400    |
//! | `NotLiked`           | 400    |
//! | `Unauthenticated`    | 401    |
//! | `Forbidden`          | 403    |
//! | `NotFound`           | 404    |
//! | `Internal`, `Store`  | 500    |
//!
//! Responses are JSON: `{"error": "...", "status": 400}`, with an extra
//! `"errors"` array for validation failures.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
