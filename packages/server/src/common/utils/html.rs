//! Pure utility functions for building HTML fragments
//!
//! These functions contain NO side effects - they take inputs and return outputs.

use url::{ParseError, Url};

/// Escape text for use inside HTML element content or a quoted attribute.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. The ampersand goes first so existing
/// entities are escaped rather than passed through.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turn a submitted link into an absolute http(s) URL for `href`/`src`.
///
/// A link without a scheme (`github.com/a/b`) gets `https://`. A link with
/// any other scheme (`javascript:`, `data:`) is refused.
pub fn normalize_http_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https").then(|| trimmed.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = format!("https://{trimmed}");
            Url::parse(&with_scheme).ok()?.host_str()?;
            Some(with_scheme)
        }
        Err(_) => None,
    }
}
