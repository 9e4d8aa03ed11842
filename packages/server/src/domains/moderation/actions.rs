use tracing::{info, warn};

use super::prompt::{build_moderation_prompt, ModerationInput};
use super::verdict::{parse_verdict, ParsedVerdict, Verdict};
use crate::kernel::BaseAI;

pub const SERVICE_UNAVAILABLE_REASON: &str = "Moderation service unavailable";
pub const COULD_NOT_PARSE_REASON: &str = "Could not parse moderation response";

/// Ask the model for a verdict on one submission.
///
/// Exactly one completion call. Never fails: an unreachable or erroring
/// endpoint and an unreadable reply both come back as rejections.
pub async fn moderate(ai: &dyn BaseAI, input: &ModerationInput<'_>) -> Verdict {
    let prompt = build_moderation_prompt(input);

    let reply = match ai.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, project = input.project_name, "Moderation call failed");
            return Verdict::reject(SERVICE_UNAVAILABLE_REASON);
        }
    };

    match parse_verdict(&reply) {
        ParsedVerdict::Verdict(verdict) => {
            info!(
                project = input.project_name,
                approved = verdict.approved,
                reason = %verdict.reason,
                "Moderation verdict"
            );
            verdict
        }
        ParsedVerdict::Malformed(raw) => {
            warn!(project = input.project_name, reply = %raw, "Failed to parse moderation response");
            Verdict::reject(COULD_NOT_PARSE_REASON)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockAI;

    fn input() -> ModerationInput<'static> {
        ModerationInput {
            project_name: "Pixel Garden",
            creator_name: "sprout",
            description: "A tiny generative garden",
            project_url: None,
        }
    }

    #[tokio::test]
    async fn test_approval_passes_through() {
        let ai = MockAI::new().with_response(r#"{"approved": true, "reason": "Looks genuine"}"#);

        let verdict = moderate(&ai, &input()).await;

        assert_eq!(verdict, Verdict::approve("Looks genuine"));
        assert_eq!(ai.call_count(), 1);
        assert!(ai.last_prompt().unwrap().contains("Pixel Garden"));
    }

    #[tokio::test]
    async fn test_endpoint_failure_fails_closed() {
        let ai = MockAI::new().with_failure("overloaded");

        let verdict = moderate(&ai, &input()).await;

        assert_eq!(verdict, Verdict::reject(SERVICE_UNAVAILABLE_REASON));
        assert_eq!(ai.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_reply_fails_closed() {
        let ai = MockAI::new().with_response("Absolutely, this one is great.");

        let verdict = moderate(&ai, &input()).await;

        assert_eq!(verdict, Verdict::reject(COULD_NOT_PARSE_REASON));
    }

    #[tokio::test]
    async fn test_fenced_rejection_keeps_reason() {
        let ai = MockAI::new()
            .with_response("```json\n{\"approved\": false, \"reason\": \"Spam\"}\n```");

        let verdict = moderate(&ai, &input()).await;

        assert_eq!(verdict, Verdict::reject("Spam"));
    }
}
