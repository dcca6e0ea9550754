//! View models - what a front end needs to render posts and the wizard.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use boostblog_core::{Post, Step, WizardSession};

/// A post as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub category: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created_date: String,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            summary: post.summary.clone(),
            category: post.category.clone(),
            created_date: post.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A single post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Creation time in the local timezone, for display.
    pub created_local: String,
}

impl From<&Post> for PostDetail {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            category: post.category.clone(),
            summary: post.summary.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            created_local: post
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

/// One dot of the wizard progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndicator {
    pub number: u8,
    pub label: String,
    pub active: bool,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub steps: Vec<StepIndicator>,
}

impl WizardProgress {
    pub fn for_step(current: Step) -> Self {
        let steps = Step::ALL
            .into_iter()
            .map(|step| StepIndicator {
                number: step.number(),
                label: step.label().to_string(),
                active: step == current,
                done: step < current,
            })
            .collect();
        Self { steps }
    }
}

/// Contents of the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub category: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_id: Option<String>,
}

impl From<&WizardSession> for ReviewSummary {
    fn from(session: &WizardSession) -> Self {
        let draft = session.draft();
        Self {
            title: draft.title.clone(),
            author: draft.author.clone(),
            summary: draft.summary.clone(),
            category: draft.category.clone(),
            content: draft.content.clone(),
            submitted_id: session.submitted_id().map(str::to_string),
        }
    }
}
