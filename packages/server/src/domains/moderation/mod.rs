//! Content moderation of incoming submissions.
//!
//! One LLM call per submission. The policy is fail-closed: anything other than
//! a clean, parseable approval is a rejection.

pub mod actions;
pub mod prompt;
pub mod verdict;

pub use actions::{moderate, COULD_NOT_PARSE_REASON, SERVICE_UNAVAILABLE_REASON};
pub use prompt::{build_moderation_prompt, ModerationInput};
pub use verdict::{parse_verdict, ParsedVerdict, Verdict};
