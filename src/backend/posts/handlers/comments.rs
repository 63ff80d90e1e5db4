/**
 * Comment Handlers
 *
 * `POST /api/posts/comment/{id}` and
 * `DELETE /api/posts/comment/{id}/{comment_id}`
 *
 * Both answer with the post's comment list after the change.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::posts::handlers::types::CreateCommentRequest;
use crate::backend::posts::handlers::{load_author, load_post, save_post};
use crate::backend::server::state::AppState;
use crate::shared::{Comment, SharedError};

/// Add comment handler
///
/// # Errors
///
/// * `400 Bad Request` - empty text
/// * `404 Not Found` - unknown post, or the caller's account is gone
pub async fn add_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(SharedError::from)?;

    let mut post = load_post(&state, &id).await?;
    let author = load_author(&state, auth.user_id).await?;

    let comment_id = post.add_comment(&author, request.text).id;
    save_post(&state, &post).await?;

    tracing::info!("Comment {} added to post {}", comment_id, post.id);

    Ok(Json(post.comments))
}

/// Remove comment handler
///
/// # Errors
///
/// * `403 Forbidden` - the comment belongs to someone else
/// * `404 Not Found` - unknown post or comment
pub async fn remove_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let mut post = load_post(&state, &id).await?;

    let comment_id = Uuid::parse_str(&comment_id).map_err(|_| SharedError::CommentNotFound)?;
    let removed = post.remove_comment(comment_id, auth.user_id)?;
    save_post(&state, &post).await?;

    tracing::info!("Comment {} removed from post {}", removed.id, post.id);

    Ok(Json(post.comments))
}
