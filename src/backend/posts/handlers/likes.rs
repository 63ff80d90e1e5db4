/**
 * Like Handlers
 *
 * `PUT /api/posts/like/{id}` and `PUT /api/posts/unlike/{id}`
 *
 * Both answer with the post's like list after the change.
 */

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::posts::handlers::{load_post, save_post};
use crate::backend::server::state::AppState;
use crate::shared::Like;

/// Like handler
///
/// # Errors
///
/// * `400 Bad Request` - the caller already likes the post
/// * `404 Not Found` - unknown or malformed id
pub async fn like_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(&state, &id).await?;
    post.like(auth.user_id)?;
    save_post(&state, &post).await?;

    tracing::info!("Post {} liked by {}", post.id, auth.user_id);

    Ok(Json(post.likes))
}

/// Unlike handler
///
/// # Errors
///
/// * `400 Bad Request` - the caller does not like the post
/// * `404 Not Found` - unknown or malformed id
pub async fn unlike_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(&state, &id).await?;
    post.unlike(auth.user_id)?;
    save_post(&state, &post).await?;

    tracing::info!("Post {} unliked by {}", post.id, auth.user_id);

    Ok(Json(post.likes))
}
