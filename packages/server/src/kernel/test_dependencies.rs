// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseContentStore, DocumentSnapshot, DocumentUpdate, ServerDeps};

// =============================================================================
// Mock AI
// =============================================================================

/// Queued reply: either text or a failure (e.g. an upstream 529).
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

pub struct MockAI {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Text(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.with_response(json)
    }

    /// Make the next call fail as if the endpoint answered with an error status
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Failure(message.into()));
        self
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(r#"{"approved": true, "reason": "Mock approval"}"#.to_string());
        }

        match responses.remove(0) {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => bail!("API error (529): {}", message),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

// =============================================================================
// Mock Content Store
// =============================================================================

pub struct MockContentStore {
    document: Arc<Mutex<Option<DocumentSnapshot>>>,
    fetch_failure: Arc<Mutex<Option<String>>>,
    concurrent_commit: Arc<Mutex<Option<String>>>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
    update_calls: Arc<Mutex<Vec<DocumentUpdate>>>,
    updates: Arc<Mutex<Vec<(String, DocumentUpdate)>>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self {
            document: Arc::new(Mutex::new(None)),
            fetch_failure: Arc::new(Mutex::new(None)),
            concurrent_commit: Arc::new(Mutex::new(None)),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
            update_calls: Arc::new(Mutex::new(Vec::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve this document at version `version`
    pub fn with_document(self, content: impl Into<String>, version: impl Into<String>) -> Self {
        *self.document.lock().unwrap() = Some(DocumentSnapshot {
            content: content.into(),
            version: version.into(),
        });
        self
    }

    /// Make every fetch fail with this message
    pub fn with_fetch_failure(self, message: impl Into<String>) -> Self {
        *self.fetch_failure.lock().unwrap() = Some(message.into());
        self
    }

    /// Simulate another writer committing `version` right after our read
    pub fn with_concurrent_commit(self, version: impl Into<String>) -> Self {
        *self.concurrent_commit.lock().unwrap() = Some(version.into());
        self
    }

    /// Get all paths that were fetched
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Get every attempted write, accepted or not
    pub fn update_attempts(&self) -> Vec<DocumentUpdate> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Get all accepted writes
    pub fn updates(&self) -> Vec<(String, DocumentUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    /// Current document content, if any
    pub fn current_content(&self) -> Option<String> {
        self.document.lock().unwrap().as_ref().map(|d| d.content.clone())
    }

    /// Total number of calls that would have hit the network
    pub fn call_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len() + self.update_calls.lock().unwrap().len()
    }
}

impl Default for MockContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseContentStore for MockContentStore {
    async fn fetch(&self, path: &str) -> Result<DocumentSnapshot> {
        self.fetch_calls.lock().unwrap().push(path.to_string());

        if let Some(message) = self.fetch_failure.lock().unwrap().clone() {
            bail!("Failed to get file: {}", message);
        }

        let mut document = self.document.lock().unwrap();
        let Some(snapshot) = document.clone() else {
            bail!("Failed to get file: Not Found");
        };

        if let Some(version) = self.concurrent_commit.lock().unwrap().take() {
            if let Some(doc) = document.as_mut() {
                doc.version = version;
            }
        }

        Ok(snapshot)
    }

    async fn update(&self, path: &str, update: &DocumentUpdate) -> Result<()> {
        self.update_calls.lock().unwrap().push(update.clone());

        let mut document = self.document.lock().unwrap();

        let current_version = document.as_ref().map(|d| d.version.clone());
        if current_version.as_deref() != Some(update.base_version.as_str()) {
            bail!(
                "Failed to update GitHub: Conflict: {} does not match {}",
                path,
                update.base_version
            );
        }

        let next_version = format!("{}+1", update.base_version);
        *document = Some(DocumentSnapshot {
            content: update.content.clone(),
            version: next_version,
        });

        self.updates
            .lock()
            .unwrap()
            .push((path.to_string(), update.clone()));
        Ok(())
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// Mocks plus the ServerDeps wired to them
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub content_store: Arc<MockContentStore>,
}

impl TestDependencies {
    pub fn new(ai: MockAI, content_store: MockContentStore) -> Self {
        Self {
            ai: Arc::new(ai),
            content_store: Arc::new(content_store),
        }
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.ai.clone(), self.content_store.clone(), "index.html")
    }
}
