/**
 * Read Post Handlers
 *
 * `GET /api/posts` and `GET /api/posts/{id}`
 */

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::posts::handlers::load_post;
use crate::backend::server::state::AppState;
use crate::shared::Post;

/// All posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = state.posts.list_posts().await?;
    tracing::debug!("Listing {} posts", posts.len());
    Ok(Json(posts))
}

/// A single post
///
/// # Errors
///
/// * `404 Not Found` - unknown or malformed id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    load_post(&state, &id).await.map(Json)
}
