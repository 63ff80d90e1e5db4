//! Posts Module
//!
//! Post CRUD plus likes and comments.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs          - Module exports
//! ├── db.rs           - Content store contract
//! └── handlers/       - HTTP handlers
//! ```
//!
//! Every handler here sits behind the token gate and receives the caller as
//! an [`AuthenticatedUser`](crate::backend::middleware::AuthenticatedUser).

/// Content store contract
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::PostStore;
pub use handlers::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    unlike_post,
};
