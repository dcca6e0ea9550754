use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Field;

/// Post entity - a persisted blog post.
///
/// Created only through the post repository and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub category: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a draft with a generated ID and timestamp.
    pub fn new(draft: PostDraft) -> Self {
        let PostDraft {
            title,
            author,
            summary,
            category,
            content,
        } = draft;

        Self {
            id: Uuid::new_v4().to_string(),
            title,
            author,
            summary,
            category,
            content,
            created_at: Utc::now(),
        }
    }
}

/// In-progress data for a post that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub category: String,
    pub content: String,
}

impl PostDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Summary => &self.summary,
            Field::Category => &self.category,
            Field::Content => &self.content,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Summary => &mut self.summary,
            Field::Category => &mut self.category,
            Field::Content => &mut self.content,
        };
        *slot = value.into();
    }

    /// Merge the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: DraftPatch) {
        for (field, value) in patch.values {
            self.set(field, value);
        }
    }
}

/// Partial set of field values to merge into a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    values: Vec<(Field, String)>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch holding a single field value.
    pub fn field(field: Field, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.retain(|(existing, _)| *existing != field);
        self.values.push((field, value.into()));
        self
    }

    pub fn title(self, value: impl Into<String>) -> Self {
        self.with(Field::Title, value)
    }

    pub fn author(self, value: impl Into<String>) -> Self {
        self.with(Field::Author, value)
    }

    pub fn summary(self, value: impl Into<String>) -> Self {
        self.with(Field::Summary, value)
    }

    pub fn category(self, value: impl Into<String>) -> Self {
        self.with(Field::Category, value)
    }

    pub fn content(self, value: impl Into<String>) -> Self {
        self.with(Field::Content, value)
    }
}

/// Change notification emitted after the post collection was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    Created(Post),
    Removed(String),
}
