/**
 * Content Store Contract
 *
 * Operations the post handlers need from the content store. A post is one
 * document: likes and comments are saved together with it.
 *
 * Like, unlike, comment and uncomment are read-modify-write sequences:
 * `find_post`, change in memory, `save_post`. Two callers touching the same
 * post at the same time can overwrite each other's change.
 */

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::store::StoreResult;
use crate::shared::Post;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post
    async fn insert_post(&self, post: &Post) -> StoreResult<()>;

    /// All posts, newest first
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Get post by ID
    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Write back the like and comment lists of an existing post
    ///
    /// Returns `false` if the post no longer exists.
    async fn save_post(&self, post: &Post) -> StoreResult<bool>;

    /// Remove a post; returns `false` if it did not exist
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;
}
