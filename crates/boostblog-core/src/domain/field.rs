use std::fmt;
use std::str::FromStr;

/// Categories offered by the creation form.
///
/// The wizard only requires a non-empty category; this list is what a front
/// end presents as choices.
pub const CATEGORIES: [&str; 3] = ["Tech", "Lifestyle", "Business"];

/// One of the editable text fields of a post draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Author,
    Summary,
    Category,
    Content,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Summary,
        Field::Category,
        Field::Content,
    ];

    /// Wire name, as used in the persisted JSON.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Summary => "summary",
            Field::Category => "category",
            Field::Content => "content",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Summary => "Summary",
            Field::Category => "Category",
            Field::Content => "Content",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Title => "A concise, descriptive title",
            Field::Author => "Your name",
            Field::Summary => "A clear, brief overview of the post...",
            Field::Category => "Select a category",
            Field::Content => "Write your post content here...",
        }
    }

    /// Input length cap in characters, if the form enforces one.
    pub fn max_length(self) -> Option<usize> {
        match self {
            Field::Summary => Some(240),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a draft field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
