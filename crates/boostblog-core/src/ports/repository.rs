use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - the durable collection of posts.
///
/// The collection is ordered most-recently-created first. Lookup misses are
/// `None`, not errors.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post built from `draft` and return it.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Removing an unknown ID is a no-op.
    async fn remove(&self, id: &str) -> Result<(), RepoError>;
}
