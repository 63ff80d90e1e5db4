//! DevConnect - Main Library
//!
//! DevConnect is a small social-network backend built on Axum: users register
//! and log in with a password, receive a signed token, and then create, like
//! and comment on posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by every layer
//!   - User profiles, posts, likes and comments
//!   - Shared error types
//!   - Application configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and the token gate
//!   - Identity and post handlers
//!   - Document stores (PostgreSQL and in-memory)
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnect::backend::server::init::create_app;
//! use devconnect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Types shared between the handlers, the stores and API clients
pub mod shared;

/// Server-side code
pub mod backend;
