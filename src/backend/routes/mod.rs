//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Identity endpoints
//! └── post_routes.rs  - Post endpoints
//! ```
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | /api/users | none |
//! | POST | /api/auth | none |
//! | GET | /api/auth | token |
//! | POST, GET | /api/posts | token |
//! | GET, DELETE | /api/posts/{id} | token |
//! | PUT | /api/posts/like/{id} | token |
//! | PUT | /api/posts/unlike/{id} | token |
//! | POST | /api/posts/comment/{id} | token |
//! | DELETE | /api/posts/comment/{id}/{comment_id} | token |
//!
//! Unknown paths get a 404 JSON error.

/// Main router creation
pub mod router;

/// Identity routes
pub mod api_routes;

/// Post routes
pub mod post_routes;

pub use router::create_router;
