//! Post store backed by a key-value substrate.
//!
//! The whole collection lives under one key. Mutations are
//! read-transform-write sequences serialized by a writer lock, and every
//! mutation is persisted before it returns.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

use boostblog_core::ports::{KeyValueStore, PostRepository};
use boostblog_core::{Post, PostDraft, PostEvent, RepoError};

use super::codec::{decode_posts, encode_posts};

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Substrate key holding the collection.
    pub key: String,
    /// Capacity of the change notification channel.
    pub event_buffer: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: "posts".to_string(),
            event_buffer: 64,
        }
    }
}

/// Durable post collection, newest first.
pub struct PostStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Mutex<()>,
    events: broadcast::Sender<PostEvent>,
}

impl PostStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: Arc<dyn KeyValueStore>, config: StoreConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            storage,
            key: config.key,
            write_lock: Mutex::new(()),
            events,
        }
    }

    /// Register for change notifications.
    ///
    /// Events are sent after the change has been persisted.
    pub fn subscribe(&self) -> broadcast::Receiver<PostEvent> {
        self.events.subscribe()
    }

    pub async fn len(&self) -> Result<usize, RepoError> {
        Ok(self.load().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool, RepoError> {
        Ok(self.load().await?.is_empty())
    }

    /// Remove the post with `id` and report whether one was there.
    ///
    /// The lookup and the write happen under the writer lock.
    pub async fn take(&self, id: &str) -> Result<bool, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            tracing::debug!(post_id = %id, "No post to remove");
            return Ok(false);
        }

        self.persist(&posts).await?;

        tracing::debug!(post_id = %id, total = posts.len(), "Post removed");
        self.notify(PostEvent::Removed(id.to_string()));
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        let raw = self.storage.get(&self.key).await?;
        Ok(raw.as_deref().map(decode_posts).unwrap_or_default())
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), RepoError> {
        let raw = encode_posts(posts)?;
        self.storage.set(&self.key, &raw).await?;
        Ok(())
    }

    fn notify(&self, event: PostEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        self.load().await
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let mut post = Post::new(draft);
        while posts.iter().any(|p| p.id == post.id) {
            post.id = Uuid::new_v4().to_string();
        }

        posts.insert(0, post.clone());
        self.persist(&posts).await?;

        tracing::debug!(post_id = %post.id, total = posts.len(), "Post created");
        self.notify(PostEvent::Created(post.clone()));
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.load().await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn remove(&self, id: &str) -> Result<(), RepoError> {
        self.take(id).await.map(|_| ())
    }
}
