pub mod submission;

pub use submission::{Category, Submission, SubmissionPayload, FALLBACK_CATEGORY_LABEL};
