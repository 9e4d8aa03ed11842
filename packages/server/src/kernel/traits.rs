// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Moderation policy and publishing live in domains/ and only talk to these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseContentStore)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - LLM completion)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single user prompt (returns raw text of the reply)
    ///
    /// Errors cover transport failures, non-success statuses and replies
    /// without text. Callers decide what an error means for them.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier, used in commit messages
    fn model_name(&self) -> &str {
        "unknown"
    }
}

// =============================================================================
// Content Store Trait (Infrastructure - versioned remote files)
// =============================================================================

/// Full text of a remote file plus the version token it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub content: String,
    pub version: String,
}

/// A write that only succeeds if the file is still at `base_version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpdate {
    pub content: String,
    pub base_version: String,
    pub message: String,
}

#[async_trait]
pub trait BaseContentStore: Send + Sync {
    /// Read the current content and version token of `path`
    async fn fetch(&self, path: &str) -> Result<DocumentSnapshot>;

    /// Write `path`, conditioned on `update.base_version` still being current
    async fn update(&self, path: &str, update: &DocumentUpdate) -> Result<()>;
}
