//! # BoostBlog Core
//!
//! The domain layer of BoostBlog.
//! This crate contains the post model, the creation wizard state machine and
//! the ports the infrastructure layer implements. No I/O happens here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod wizard;

pub use domain::{Post, PostDraft, PostEvent};
pub use error::{DomainError, RepoError, StorageError};
pub use wizard::{Step, WizardSession};
