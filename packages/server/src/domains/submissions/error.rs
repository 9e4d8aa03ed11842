use thiserror::Error;

/// Every way a submission request can end without publishing.
///
/// The `Display` text is what the submitter sees; internal detail stays in
/// the wrapped error and only reaches the logs.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Submission flagged for review. A human will review it shortly.")]
    Rejected { reason: String },

    #[error("Something went wrong. Please try again.")]
    Internal(#[from] anyhow::Error),
}
