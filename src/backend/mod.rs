//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the identity and post APIs on top of a document store.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app creation
//! - **`routes`** - Route table and router assembly
//! - **`auth`** - User records, password hashing, tokens, identity handlers
//! - **`posts`** - Post store contract and post handlers
//! - **`store`** - PostgreSQL and in-memory store implementations
//! - **`middleware`** - The token gate in front of protected routes
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Identity: users, tokens, handlers
//! ├── posts/          - Posts, likes, comments
//! ├── store/          - Store implementations
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request is handled on its own: optional token gate, then a handler
//! that reads or writes one document and answers with JSON. There is no
//! session state on the server and no background task.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`. `BackendError` carries the
//! error class and converts itself into a JSON response with the matching
//! status code. Store and signing failures are logged and reported to the
//! caller as a generic server error.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Posts, likes and comments
pub mod posts;

/// Store implementations
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
