//! Submission endpoint.
//!
//! POST / with the form's JSON body. Responses are always JSON:
//! `{success: true, message}` or `{success: false, error, reason?}`.

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::submissions::{submit_project, SubmissionError, SubmissionPayload};
use crate::kernel::ServerDeps;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SubmitResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            reason: None,
        }
    }

    pub fn failure(error: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            reason,
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = match &self {
            SubmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::InvalidBody(_)
            | SubmissionError::MissingFields
            | SubmissionError::Rejected { .. } => StatusCode::BAD_REQUEST,
            SubmissionError::Internal(e) => {
                tracing::error!(error = ?e, "Submission failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let reason = match &self {
            SubmissionError::Rejected { reason } => Some(reason.clone()),
            _ => None,
        };

        (status, Json(SubmitResponse::failure(self.to_string(), reason))).into_response()
    }
}

/// Submission handler.
///
/// Reads the raw body so a malformed payload maps to our own 400 instead of
/// an extractor rejection.
pub async fn submit_handler(
    Extension(deps): Extension<ServerDeps>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, SubmissionError> {
    let payload: SubmissionPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting malformed submission body");
        SubmissionError::InvalidBody(e)
    })?;

    let message = submit_project(&deps, payload).await?;

    Ok(Json(SubmitResponse::success(message)))
}

/// Any method on `/` other than POST (and the CORS preflight).
pub async fn method_not_allowed() -> SubmissionError {
    SubmissionError::MethodNotAllowed
}
