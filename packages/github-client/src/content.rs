//! Base64 helpers for file contents.
//!
//! The contents API returns base64 wrapped at 60 columns. Decoding works on the
//! raw bytes and only then validates UTF-8, so multi-byte characters survive.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{GitHubError, Result};

/// Decode API file content into UTF-8 text.
pub fn decode_content(encoded: &str) -> Result<String> {
    let cleaned: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| GitHubError::Parse(format!("Invalid base64 content: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| GitHubError::Parse(format!("File content is not UTF-8: {}", e)))
}

/// Encode UTF-8 text for an update request.
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
