//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Token gate for the protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use devconnect::backend::{auth::TokenService, middleware::auth_middleware};
//!
//! let tokens = TokenService::new("secret", std::time::Duration::from_secs(600));
//! let protected: Router = Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser, AUTH_TOKEN_HEADER};
