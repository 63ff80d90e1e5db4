/**
 * Create Post Handler
 *
 * `POST /api/posts`
 *
 * The caller's current name and avatar are copied into the post.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use validator::Validate;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::posts::handlers::load_author;
use crate::backend::posts::handlers::types::CreatePostRequest;
use crate::backend::server::state::AppState;
use crate::shared::{Post, SharedError};

/// Create post handler
///
/// # Errors
///
/// * `400 Bad Request` - empty text
/// * `404 Not Found` - the caller's account no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(SharedError::from)?;

    let author = load_author(&state, auth.user_id).await?;
    let post = Post::new(&author, request.text);

    state.posts.insert_post(&post).await?;

    tracing::info!("Post {} created by {}", post.id, author.id);

    Ok(Json(post))
}
