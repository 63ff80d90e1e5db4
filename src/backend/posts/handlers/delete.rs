/**
 * Delete Post Handler
 *
 * `DELETE /api/posts/{id}`, author only.
 */

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::posts::handlers::load_post;
use crate::backend::posts::handlers::types::MessageResponse;
use crate::backend::server::state::AppState;

/// Delete post handler
///
/// # Errors
///
/// * `403 Forbidden` - the caller did not write the post
/// * `404 Not Found` - unknown or malformed id
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post = load_post(&state, &id).await?;

    if !post.is_authored_by(auth.user_id) {
        tracing::warn!("User {} tried to delete post {} of {}", auth.user_id, post.id, post.user);
        return Err(BackendError::forbidden("User not authorized"));
    }

    if !state.posts.delete_post(post.id).await? {
        return Err(BackendError::not_found("Post not found"));
    }

    tracing::info!("Post {} removed", post.id);

    Ok(Json(MessageResponse::new("Post removed")))
}
