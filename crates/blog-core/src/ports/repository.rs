use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post repository - the authoritative set of posts.
///
/// Mutations are visible to every subsequent read.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a validated draft under a fresh id and return the stored post.
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Apply a partial update, returning the updated post.
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError>;

    /// Delete a post by its id.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Number of stored posts.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
