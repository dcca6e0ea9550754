use std::collections::BTreeSet;

use crate::domain::{DraftPatch, Field, Post, PostDraft};
use crate::error::RepoError;
use crate::ports::PostRepository;

use super::Step;
use super::validation::{self, FieldErrors};

/// State of one post creation flow.
///
/// Owned by a single front end session. Nothing is persisted until
/// [`WizardSession::submit`] succeeds, so dropping a session is a cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSession {
    draft: PostDraft,
    step: Step,
    touched: BTreeSet<Field>,
    submitted_id: Option<String>,
}

impl WizardSession {
    /// Start a session on the first step with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// ID of the post created by this session, once submitted.
    pub fn submitted_id(&self) -> Option<&str> {
        self.submitted_id.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_id.is_some()
    }

    /// Merge field values into the draft. Never validates.
    pub fn update_field(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Mark a field as interacted with, so its error becomes visible.
    pub fn touch_field(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn validate_step(&self, step: Step) -> bool {
        validation::validate_step(step, &self.draft)
    }

    /// Whether the current step's rules hold.
    pub fn can_advance(&self) -> bool {
        self.validate_step(self.step)
    }

    /// Move to the next step if the current one is valid.
    ///
    /// Every field of the current step is touched first, so a rejected
    /// advance always surfaces its errors. Returns `false` when rejected, in
    /// which case the step is unchanged.
    pub fn advance(&mut self) -> bool {
        let fields = self.step.fields();
        self.touched.extend(fields.iter().copied());

        if !self.can_advance() {
            return false;
        }
        self.step = self.step.next();
        true
    }

    /// Move to the previous step. Never validates.
    pub fn retreat(&mut self) {
        self.step = self.step.prev();
    }

    /// Jump straight to `step` without validating the steps in between.
    ///
    /// Meant for showing the review after a submit. Jumping forward past an
    /// invalid step is possible; callers that need the guarantee should use
    /// [`WizardSession::advance`].
    pub fn go_to(&mut self, step: Step) {
        self.step = step;
    }

    /// Visible errors for the current step, recomputed on every call.
    pub fn errors(&self) -> FieldErrors {
        validation::field_errors(&self.draft, self.step, &self.touched)
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors().get(&field).copied()
    }

    /// Persist the draft as a new post.
    ///
    /// Returns `Ok(None)` without touching the repository when the content
    /// rules fail. On success the session records the new post's ID and
    /// moves to the review step.
    pub async fn submit<R>(&mut self, repo: &R) -> Result<Option<Post>, RepoError>
    where
        R: PostRepository + ?Sized,
    {
        if !self.validate_step(Step::Content) {
            return Ok(None);
        }

        let post = repo.create(self.draft.clone()).await?;
        self.submitted_id = Some(post.id.clone());
        self.step = Step::Review;
        Ok(Some(post))
    }

    /// Discard the draft and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Repository that keeps posts in a vector, newest first.
    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
            let post = Post::new(draft);
            self.posts.lock().unwrap().insert(0, post.clone());
            Ok(post)
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
            Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn remove(&self, id: &str) -> Result<(), RepoError> {
            self.posts.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    fn filled_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.update_field(
            DraftPatch::new()
                .title("Hello World")
                .author("Ada")
                .summary("This is a sufficiently long summary.")
                .category("Tech")
                .content("Twenty characters or more of content."),
        );
        session
    }

    #[test]
    fn starts_empty_on_first_step() {
        let session = WizardSession::new();
        assert_eq!(session.step(), Step::Metadata);
        assert_eq!(session.draft(), &PostDraft::default());
        assert!(session.touched().is_empty());
        assert!(session.errors().is_empty());
        assert!(!session.is_submitted());
    }

    #[test]
    fn rejected_advance_touches_step_fields_and_stays() {
        let mut session = WizardSession::new();

        assert!(!session.advance());
        assert_eq!(session.step(), Step::Metadata);
        assert!(session.is_touched(Field::Title));
        assert!(session.is_touched(Field::Author));
        assert!(!session.is_touched(Field::Summary));

        let errors = session.errors();
        assert_eq!(errors.get(&Field::Title), Some(&"Title is required"));
        assert_eq!(errors.get(&Field::Author), Some(&"Author is required"));
    }

    #[test]
    fn touched_fields_do_not_unlock_invalid_steps() {
        let mut session = WizardSession::new();
        session.touch_field(Field::Title);
        session.touch_field(Field::Author);
        session.update_field(DraftPatch::new().title("Hi").author("Ada"));

        assert!(!session.can_advance());
        assert!(!session.advance());
        assert_eq!(session.step(), Step::Metadata);
        assert_eq!(
            session.error_for(Field::Title),
            Some("Title must be at least 3 characters")
        );
    }

    #[test]
    fn touch_is_idempotent() {
        let mut session = WizardSession::new();
        session.touch_field(Field::Title);
        let once = session.clone();
        session.touch_field(Field::Title);
        assert_eq!(session, once);
    }

    #[test]
    fn advance_walks_to_review_and_saturates() {
        let mut session = filled_session();

        assert!(session.advance());
        assert_eq!(session.step(), Step::Summary);
        assert!(session.advance());
        assert_eq!(session.step(), Step::Content);
        assert!(session.advance());
        assert_eq!(session.step(), Step::Review);
        assert!(session.advance());
        assert_eq!(session.step(), Step::Review);
    }

    #[test]
    fn retreat_ignores_validity_and_floors_at_first_step() {
        let mut session = filled_session();
        session.advance();
        session.advance();
        session.update_field(DraftPatch::new().title("").summary(""));

        session.retreat();
        assert_eq!(session.step(), Step::Summary);
        session.retreat();
        assert_eq!(session.step(), Step::Metadata);
        session.retreat();
        assert_eq!(session.step(), Step::Metadata);
    }

    #[test]
    fn errors_follow_the_current_step() {
        let mut session = WizardSession::new();
        session.touch_field(Field::Summary);
        assert!(session.errors().is_empty());

        session.go_to(Step::Summary);
        assert_eq!(session.error_for(Field::Summary), Some("Summary is required"));

        session.update_field(DraftPatch::field(Field::Summary, "Long enough now"));
        assert_eq!(session.error_for(Field::Summary), None);
    }

    #[test]
    fn go_to_jumps_without_validation() {
        let mut session = WizardSession::new();
        session.go_to(Step::Review);
        assert_eq!(session.step(), Step::Review);
        assert!(session.touched().is_empty());
    }

    #[tokio::test]
    async fn submit_rejects_short_content_without_persisting() {
        let repo = RecordingRepository::default();
        let mut session = filled_session();
        session.update_field(DraftPatch::new().content("too short"));
        session.go_to(Step::Content);

        let result = session.submit(&repo).await.unwrap();

        assert!(result.is_none());
        assert_eq!(session.step(), Step::Content);
        assert!(!session.is_submitted());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_persists_and_moves_to_review() {
        let repo = RecordingRepository::default();
        let mut session = filled_session();
        session.go_to(Step::Content);

        let post = session.submit(&repo).await.unwrap().expect("valid draft");

        assert_eq!(session.step(), Step::Review);
        assert_eq!(session.submitted_id(), Some(post.id.as_str()));
        assert_eq!(post.title, "Hello World");
        assert_eq!(repo.find_by_id(&post.id).await.unwrap(), Some(post));
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = filled_session();
        session.advance();
        session.reset();
        assert_eq!(session, WizardSession::new());
    }
}
