use std::fmt;

use crate::domain::Field;

/// A stage of the creation wizard. Steps are strictly ordered 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Metadata = 1,
    Summary = 2,
    Content = 3,
    Review = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Metadata, Step::Summary, Step::Content, Step::Review];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Metadata => "Metadata",
            Step::Summary => "Summary & Category",
            Step::Content => "Content",
            Step::Review => "Review & Submit",
        }
    }

    /// Fields edited on this step. The review step owns none.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Metadata => &[Field::Title, Field::Author],
            Step::Summary => &[Field::Summary, Field::Category],
            Step::Content => &[Field::Content],
            Step::Review => &[],
        }
    }

    /// The following step, saturating at `Review`.
    pub fn next(self) -> Step {
        match self {
            Step::Metadata => Step::Summary,
            Step::Summary => Step::Content,
            Step::Content | Step::Review => Step::Review,
        }
    }

    /// The preceding step, saturating at `Metadata`.
    pub fn prev(self) -> Step {
        match self {
            Step::Metadata | Step::Summary => Step::Metadata,
            Step::Content => Step::Summary,
            Step::Review => Step::Content,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no wizard step numbered {0}")]
pub struct InvalidStep(pub u8);

impl TryFrom<u8> for Step {
    type Error = InvalidStep;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::ALL
            .into_iter()
            .find(|step| step.number() == value)
            .ok_or(InvalidStep(value))
    }
}
