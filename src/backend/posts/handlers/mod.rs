//! Post Handlers Module
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Handler exports and shared lookups
//! ├── types.rs      - Request and response types
//! ├── create.rs     - POST /api/posts
//! ├── read.rs       - GET /api/posts, GET /api/posts/{id}
//! ├── delete.rs     - DELETE /api/posts/{id}
//! ├── likes.rs      - PUT /api/posts/like/{id}, PUT /api/posts/unlike/{id}
//! └── comments.rs   - POST /api/posts/comment/{id}, DELETE /api/posts/comment/{id}/{comment_id}
//! ```

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{Post, UserProfile};

pub mod types;

pub mod create;
pub mod read;
pub mod delete;
pub mod likes;
pub mod comments;

pub use types::{CreateCommentRequest, CreatePostRequest, MessageResponse};

pub use comments::{add_comment, remove_comment};
pub use create::create_post;
pub use delete::delete_post;
pub use likes::{like_post, unlike_post};
pub use read::{get_post, list_posts};

/// Resolve a post id from the path
///
/// An id that is not a UUID cannot name a post, so it gets the same answer
/// as an unknown one.
pub(crate) async fn load_post(state: &AppState, raw_id: &str) -> Result<Post, BackendError> {
    let Ok(id) = Uuid::parse_str(raw_id) else {
        tracing::debug!("Malformed post id: {}", raw_id);
        return Err(post_not_found());
    };

    state.posts.find_post(id).await?.ok_or_else(post_not_found)
}

/// Write back likes and comments, treating a vanished post as not found
pub(crate) async fn save_post(state: &AppState, post: &Post) -> Result<(), BackendError> {
    if state.posts.save_post(post).await? {
        Ok(())
    } else {
        tracing::warn!("Post {} deleted during update", post.id);
        Err(post_not_found())
    }
}

/// Profile of the caller, used for author snapshots
pub(crate) async fn load_author(state: &AppState, user_id: Uuid) -> Result<UserProfile, BackendError> {
    state
        .users
        .find_user_by_id(user_id)
        .await?
        .map(|user| user.profile())
        .ok_or_else(|| {
            tracing::warn!("Token names unknown user: {}", user_id);
            BackendError::not_found("User not found")
        })
}

fn post_not_found() -> BackendError {
    BackendError::not_found("Post not found")
}
