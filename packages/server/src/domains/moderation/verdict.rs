use serde::{Deserialize, Serialize};

/// Moderation outcome for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub approved: bool,
    pub reason: String,
}

impl Verdict {
    pub fn approve(reason: impl Into<String>) -> Self {
        Self {
            approved: true,
            reason: reason.into(),
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: reason.into(),
        }
    }
}

/// Result of reading a verdict out of freeform model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVerdict {
    Verdict(Verdict),
    /// Holds the raw text for logging.
    Malformed(String),
}

#[derive(Deserialize)]
struct RawVerdict {
    approved: bool,
    #[serde(default)]
    reason: Option<String>,
}

impl From<RawVerdict> for Verdict {
    fn from(raw: RawVerdict) -> Self {
        Self {
            approved: raw.approved,
            reason: raw.reason.unwrap_or_default(),
        }
    }
}

/// Parse the model's reply into a verdict.
///
/// Accepts bare JSON, JSON wrapped in a ```` ``` ```` or ```` ```json ```` fence,
/// and as a last resort the outermost `{...}` span of the text. Never panics
/// and never errors; anything unusable comes back as `Malformed`.
pub fn parse_verdict(text: &str) -> ParsedVerdict {
    let unfenced = strip_code_fence(text);

    if let Ok(raw) = serde_json::from_str::<RawVerdict>(unfenced) {
        return ParsedVerdict::Verdict(raw.into());
    }

    if let Some(object) = outermost_object(unfenced) {
        if let Ok(raw) = serde_json::from_str::<RawVerdict>(object) {
            return ParsedVerdict::Verdict(raw.into());
        }
    }

    ParsedVerdict::Malformed(text.to_string())
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Optional language tag on the opening fence line
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
