//! Submission intake: validate, moderate, publish.

pub mod actions;
pub mod error;
pub mod models;

pub use actions::{submit_project, SUCCESS_MESSAGE};
pub use error::SubmissionError;
pub use models::{Category, Submission, SubmissionPayload};
