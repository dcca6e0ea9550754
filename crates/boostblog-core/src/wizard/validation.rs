//! Field rules and the per-step validation predicates built from them.
//!
//! Errors are always derived from the current draft; nothing here is cached.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Field, PostDraft};

use super::Step;

/// Visible error message per field.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Minimum trimmed length, in characters.
fn min_length(field: Field) -> usize {
    match field {
        Field::Title => 3,
        Field::Summary => 10,
        Field::Content => 20,
        Field::Author | Field::Category => 1,
    }
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Title => "Title is required",
        Field::Author => "Author is required",
        Field::Summary => "Summary is required",
        Field::Category => "Category is required",
        Field::Content => "Content is required",
    }
}

fn too_short_message(field: Field) -> &'static str {
    match field {
        Field::Title => "Title must be at least 3 characters",
        Field::Summary => "Summary must be at least 10 characters",
        Field::Content => "Content must be at least 20 characters",
        Field::Author | Field::Category => required_message(field),
    }
}

/// The error for `field` against `draft`, regardless of touch state.
pub fn field_error(field: Field, draft: &PostDraft) -> Option<&'static str> {
    let len = draft.get(field).trim().chars().count();
    if len == 0 {
        Some(required_message(field))
    } else if len < min_length(field) {
        Some(too_short_message(field))
    } else {
        None
    }
}

/// Whether `draft` satisfies every rule of `step`.
///
/// - Metadata: title of at least 3 characters and a non-blank author.
/// - Summary: summary of at least 10 characters and a non-blank category.
/// - Content: content of at least 20 characters.
/// - Review: always valid.
pub fn validate_step(step: Step, draft: &PostDraft) -> bool {
    step.fields()
        .iter()
        .all(|field| field_error(*field, draft).is_none())
}

/// Errors to display for `step`: only its own fields, and only touched ones.
pub fn field_errors(draft: &PostDraft, step: Step, touched: &BTreeSet<Field>) -> FieldErrors {
    step.fields()
        .iter()
        .filter(|field| touched.contains(*field))
        .filter_map(|field| field_error(*field, draft).map(|message| (*field, message)))
        .collect()
}
