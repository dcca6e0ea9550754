use std::io::Write;

use boostblog_infra::PostStore;

use crate::error::AppResult;

/// Delete a post. Unknown ids are a silent no-op.
pub async fn run<W: Write>(store: &PostStore, id: &str, out: &mut W) -> AppResult<()> {
    if store.take(id).await? {
        tracing::info!(post_id = %id, "Post deleted");
        writeln!(out, "Deleted {id}.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use boostblog_core::PostDraft;
    use boostblog_core::ports::PostRepository;
    use boostblog_infra::InMemoryStorage;

    use super::*;

    #[tokio::test]
    async fn deletes_existing_post() {
        let store = PostStore::new(Arc::new(InMemoryStorage::new()));
        let post = store.create(PostDraft::default()).await.unwrap();

        let mut out = Vec::new();
        run(&store, &post.id, &mut out).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), format!("Deleted {}.\n", post.id));
    }

    #[tokio::test]
    async fn missing_id_is_a_silent_noop() {
        let store = PostStore::new(Arc::new(InMemoryStorage::new()));
        let kept = store.create(PostDraft::default()).await.unwrap();

        let mut out = Vec::new();
        run(&store, "missing", &mut out).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(store.list().await.unwrap(), vec![kept]);
    }
}
