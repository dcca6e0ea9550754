//! Domain entities - the core business objects.

mod field;
mod post;

pub use field::{CATEGORIES, Field, ParseFieldError};
pub use post::{DraftPatch, Post, PostDraft, PostEvent};
