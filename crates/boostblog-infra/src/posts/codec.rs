//! JSON encoding of the post collection.
//!
//! The collection is stored as a single JSON array of posts. Decoding fails
//! soft: data that does not parse is treated as an empty collection.

use boostblog_core::{Post, RepoError};

/// Serialize the collection as a JSON array.
pub fn encode_posts(posts: &[Post]) -> Result<String, RepoError> {
    serde_json::to_string(posts).map_err(|e| RepoError::Serialization(e.to_string()))
}

/// Parse a stored collection, falling back to empty on malformed data.
pub fn decode_posts(raw: &str) -> Vec<Post> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(raw) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, "Stored posts are malformed, starting from an empty collection");
            Vec::new()
        }
    }
}
