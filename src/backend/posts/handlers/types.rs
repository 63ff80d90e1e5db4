/**
 * Post Handler Types
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create post request (`POST /api/posts`)
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Add comment request (`POST /api/posts/comment/{id}`)
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Plain acknowledgement, e.g. `{"msg": "Post removed"}`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
