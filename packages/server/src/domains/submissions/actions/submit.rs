//! Submission pipeline: validate, moderate, publish.
//!
//! Side effects are ordered and gated: nothing external happens for an
//! invalid payload, and the page is only touched after an approval.

use tracing::{error, info};

use crate::domains::moderation::moderate;
use crate::domains::showcase::Publisher;
use crate::domains::submissions::{SubmissionError, SubmissionPayload};
use crate::kernel::ServerDeps;

pub const SUCCESS_MESSAGE: &str =
    "Project approved and added! It will appear on the site in about 30 seconds.";

/// Run one submission through the pipeline.
///
/// Returns the message to show the submitter on success.
pub async fn submit_project(
    deps: &ServerDeps,
    payload: SubmissionPayload,
) -> Result<&'static str, SubmissionError> {
    let submission = payload.validate()?;

    info!(project = %submission.project_name, "Moderating submission");
    let verdict = moderate(deps.ai.as_ref(), &submission.moderation_input()).await;

    if !verdict.approved {
        info!(
            project = %submission.project_name,
            reason = %verdict.reason,
            "Submission rejected"
        );
        return Err(SubmissionError::Rejected {
            reason: verdict.reason,
        });
    }

    info!(project = %submission.project_name, "Adding to showcase");
    Publisher::new(deps.content_store.as_ref(), &deps.showcase_path)
        .publish(&submission, deps.ai.model_name())
        .await
        .map_err(|e| {
            error!(error = ?e, project = %submission.project_name, "Publishing failed");
            SubmissionError::Internal(e)
        })?;

    Ok(SUCCESS_MESSAGE)
}
