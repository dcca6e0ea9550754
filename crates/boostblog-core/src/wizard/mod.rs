//! Post creation wizard.
//!
//! A four-step form: metadata, summary & category, content, review. Forward
//! navigation is gated on the current step's validation rules; backward
//! navigation is always allowed.

mod session;
mod step;
mod validation;

pub use session::WizardSession;
pub use step::{InvalidStep, Step};
pub use validation::{FieldErrors, field_error, field_errors, validate_step};
