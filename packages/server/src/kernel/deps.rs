//! Server dependencies for the submission pipeline (using traits for testability)
//!
//! All external services sit behind trait abstractions so tests can swap in mocks.

use anthropic_client::AnthropicClient;
use anyhow::Result;
use async_trait::async_trait;
use github_client::{content, GitHubClient, UpdateFileRequest};
use std::sync::Arc;

use crate::kernel::{BaseAI, BaseContentStore, DocumentSnapshot, DocumentUpdate};

// =============================================================================
// AnthropicClient Adapter (implements BaseAI trait)
// =============================================================================

/// Wrapper around AnthropicClient bound to one model and token budget
pub struct AnthropicAdapter {
    client: Arc<AnthropicClient>,
    model: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(client: Arc<AnthropicClient>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens,
        }
    }
}

#[async_trait]
impl BaseAI for AnthropicAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client
            .complete(&self.model, self.max_tokens, prompt)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// GitHubClient Adapter (implements BaseContentStore trait)
// =============================================================================

/// Wrapper around GitHubClient bound to one repository and branch
pub struct GitHubContentStore {
    client: Arc<GitHubClient>,
    repo: String,
    branch: String,
}

impl GitHubContentStore {
    pub fn new(client: Arc<GitHubClient>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            client,
            repo: repo.into(),
            branch: branch.into(),
        }
    }
}

#[async_trait]
impl BaseContentStore for GitHubContentStore {
    async fn fetch(&self, path: &str) -> Result<DocumentSnapshot> {
        let file = self
            .client
            .get_file(&self.repo, path, &self.branch)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get file: {}", e))?;

        let text =
            content::decode_content(&file.content).map_err(|e| anyhow::anyhow!("{}", e))?;

        Ok(DocumentSnapshot {
            content: text,
            version: file.sha,
        })
    }

    async fn update(&self, path: &str, update: &DocumentUpdate) -> Result<()> {
        let request = UpdateFileRequest {
            message: update.message.clone(),
            content: content::encode_content(&update.content),
            sha: update.base_version.clone(),
            branch: self.branch.clone(),
        };

        self.client
            .update_file(&self.repo, path, &request)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("Failed to update GitHub: {}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared by every request (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// LLM used for moderation
    pub ai: Arc<dyn BaseAI>,
    /// Site repository holding the showcase page
    pub content_store: Arc<dyn BaseContentStore>,
    /// Path of the page receiving new cards
    pub showcase_path: String,
}

impl ServerDeps {
    pub fn new(
        ai: Arc<dyn BaseAI>,
        content_store: Arc<dyn BaseContentStore>,
        showcase_path: impl Into<String>,
    ) -> Self {
        Self {
            ai,
            content_store,
            showcase_path: showcase_path.into(),
        }
    }
}
