/**
 * Post Routes
 *
 * All of them require authentication.
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::posts::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    unlike_post,
};
use crate::backend::server::state::AppState;

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post).delete(delete_post))
        .route("/api/posts/like/{id}", put(like_post))
        .route("/api/posts/unlike/{id}", put(unlike_post))
        .route("/api/posts/comment/{id}", post(add_comment))
        .route("/api/posts/comment/{id}/{comment_id}", delete(remove_comment))
}
