//! End-to-end behaviour of the creation wizard against the post store.

use std::sync::Arc;

use boostblog_core::domain::{DraftPatch, Field};
use boostblog_core::ports::PostRepository;
use boostblog_core::{PostDraft, Step, WizardSession};
use boostblog_infra::{InMemoryStorage, PostStore};

fn memory_store() -> PostStore {
    PostStore::new(Arc::new(InMemoryStorage::new()))
}

fn complete_draft() -> DraftPatch {
    DraftPatch::new()
        .title("Hello World")
        .author("Ada")
        .summary("This is a sufficiently long summary.")
        .category("Tech")
        .content("This body easily clears the twenty character minimum.")
}

async fn submit_through_wizard(store: &PostStore, patch: DraftPatch) -> WizardSession {
    let mut session = WizardSession::new();
    session.update_field(patch);
    assert!(session.advance());
    assert!(session.advance());
    assert!(session.submit(store).await.unwrap().is_some());
    session
}

#[tokio::test]
async fn submitting_a_complete_wizard_creates_one_post() {
    let store = memory_store();
    let mut session = WizardSession::new();
    session.update_field(complete_draft());

    assert!(session.advance());
    assert!(session.advance());
    assert_eq!(session.step(), Step::Content);

    let post = session.submit(&store).await.unwrap().expect("draft is valid");

    assert!(!post.id.is_empty());
    assert_eq!(session.step(), Step::Review);
    assert_eq!(session.submitted_id(), Some(post.id.as_str()));
    assert_eq!(store.list().await.unwrap().len(), 1);
    assert_eq!(store.find_by_id(&post.id).await.unwrap(), Some(post));
}

#[tokio::test]
async fn empty_first_step_is_rejected_with_messages() {
    let mut session = WizardSession::new();
    session.update_field(DraftPatch::new().title("").author(""));

    assert!(!session.advance());
    assert_eq!(session.step(), Step::Metadata);
    assert!(session.is_touched(Field::Title));
    assert!(session.is_touched(Field::Author));

    let messages: Vec<&str> = session.errors().into_values().collect();
    assert_eq!(messages, ["Title is required", "Author is required"]);
}

#[tokio::test]
async fn abandoned_session_persists_nothing() {
    let store = memory_store();
    let mut session = WizardSession::new();
    session.update_field(complete_draft());
    session.advance();
    session.advance();
    drop(session);

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn created_post_is_first_in_list() {
    let store = memory_store();
    store
        .create(PostDraft {
            title: "Older".to_string(),
            ..PostDraft::default()
        })
        .await
        .unwrap();

    let session = submit_through_wizard(&store, complete_draft()).await;
    let id = session.submitted_id().unwrap();

    let posts = store.list().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, id);
    assert_eq!(posts[1].title, "Older");
}

#[tokio::test]
async fn removed_post_is_no_longer_found() {
    let store = memory_store();
    let session = submit_through_wizard(&store, complete_draft()).await;
    let id = session.submitted_id().unwrap().to_string();

    store.remove(&id).await.unwrap();
    assert_eq!(store.find_by_id(&id).await.unwrap(), None);
    assert!(store.list().await.unwrap().iter().all(|p| p.id != id));

    let before = store.list().await.unwrap();
    store.remove(&id).await.unwrap();
    assert_eq!(store.list().await.unwrap(), before);
}

#[cfg(feature = "fs")]
mod file_backed {
    use boostblog_core::ports::KeyValueStore;
    use boostblog_infra::FileStorage;

    use super::*;

    #[tokio::test]
    async fn posts_survive_reopening_file_storage() {
        let dir = std::env::temp_dir().join(format!("boostblog-e2e-{}", uuid::Uuid::new_v4()));

        let created = {
            let store = PostStore::new(Arc::new(FileStorage::new(&dir)));
            let first = store.create(PostDraft::default()).await.unwrap();
            let session = submit_through_wizard(&store, complete_draft()).await;
            (first, session.submitted_id().unwrap().to_string())
        };

        let reopened = PostStore::new(Arc::new(FileStorage::new(&dir)));
        let posts = reopened.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, created.1);
        assert_eq!(posts[1], created.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let dir = std::env::temp_dir().join(format!("boostblog-e2e-{}", uuid::Uuid::new_v4()));
        let storage = Arc::new(FileStorage::new(&dir));
        storage.set("posts", "[{\"broken\":").await.unwrap();

        let store = PostStore::new(storage);
        assert!(store.list().await.unwrap().is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
