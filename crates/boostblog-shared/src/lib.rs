//! # BoostBlog Shared
//!
//! Serializable view models for whatever renders BoostBlog: the terminal
//! front end today, a WASM front end later.

pub mod view;

pub use view::{PostCard, PostDetail, ReviewSummary, StepIndicator, WizardProgress};
