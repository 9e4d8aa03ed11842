//! Publishing approved cards into the showcase page.
//!
//! One read and one write against the content store. The write is conditioned
//! on the version token from the read; a conflict is a hard failure and is not
//! retried.

use anyhow::{anyhow, Context, Result};
use tracing::info;

use super::card::render_card;
use crate::domains::submissions::Submission;
use crate::kernel::{BaseContentStore, DocumentUpdate};

/// Closing tag of the projects grid followed by the "load more" container.
/// New cards go right before its last occurrence.
pub const CARD_ANCHOR: &str = "</div>\n\n        <div class=\"load-more-container\">";

/// Indentation that puts the anchor back on its own line after a card.
const CARD_SEPARATOR: &str = "\n\n            ";

/// Insert `card` immediately before the last occurrence of `anchor`.
///
/// Returns `None` if the anchor is missing.
pub fn splice_card(document: &str, card: &str, anchor: &str) -> Option<String> {
    let insert_at = document.rfind(anchor)?;

    let mut spliced =
        String::with_capacity(document.len() + card.len() + CARD_SEPARATOR.len());
    spliced.push_str(&document[..insert_at]);
    spliced.push_str(card);
    spliced.push_str(CARD_SEPARATOR);
    spliced.push_str(&document[insert_at..]);
    Some(spliced)
}

pub fn commit_message(submission: &Submission, model: &str) -> String {
    format!(
        "Add project: {}\n\nSubmitted by {}\nAuto-approved by {}",
        submission.project_name, submission.creator_name, model
    )
}

pub struct Publisher<'a> {
    store: &'a dyn BaseContentStore,
    path: &'a str,
    anchor: &'a str,
}

impl<'a> Publisher<'a> {
    pub fn new(store: &'a dyn BaseContentStore, path: &'a str) -> Self {
        Self {
            store,
            path,
            anchor: CARD_ANCHOR,
        }
    }

    #[cfg(test)]
    fn with_anchor(mut self, anchor: &'a str) -> Self {
        self.anchor = anchor;
        self
    }

    /// Render `submission` and commit it into the page.
    pub async fn publish(&self, submission: &Submission, approved_by: &str) -> Result<()> {
        let snapshot = self
            .store
            .fetch(self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path))?;

        let card = render_card(submission);

        let updated = splice_card(&snapshot.content, &card, self.anchor).ok_or_else(|| {
            anyhow!(
                "Could not find insertion point in {}; page structure changed",
                self.path
            )
        })?;

        let update = DocumentUpdate {
            content: updated,
            base_version: snapshot.version,
            message: commit_message(submission, approved_by),
        };

        self.store
            .update(self.path, &update)
            .await
            .with_context(|| format!("Failed to write {}", self.path))?;

        info!(
            project = %submission.project_name,
            path = self.path,
            "Published project card"
        );
        Ok(())
    }
}
