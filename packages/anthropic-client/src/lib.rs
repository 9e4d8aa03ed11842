//! Pure Anthropic Messages API client
//!
//! A minimal client for the Anthropic Messages API with no domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, Message, MessagesRequest};
//!
//! let client = AnthropicClient::from_env()?;
//!
//! let response = client
//!     .create_message(
//!         MessagesRequest::new("claude-3-haiku-20240307", 256)
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//!
//! println!("{}", response.text().unwrap_or_default());
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// API version sent with every request.
pub const API_VERSION: &str = "2023-06-01";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Pure Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AnthropicError::Config("ANTHROPIC_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, gateways, local fakes).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one Messages request.
    ///
    /// Single attempt: no retries and no timeout beyond the transport defaults.
    pub async fn create_message(&self, request: MessagesRequest) -> Result<MessagesResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");
            return Err(AnthropicError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        debug!(
            id = ?messages_response.id,
            model = messages_response.model.as_deref().unwrap_or(&request.model),
            stop_reason = ?messages_response.stop_reason,
            input_tokens = messages_response.usage.as_ref().map(|u| u.input_tokens),
            output_tokens = messages_response.usage.as_ref().map(|u| u.output_tokens),
            duration_ms = start.elapsed().as_millis(),
            "Anthropic message created"
        );

        Ok(messages_response)
    }

    /// Send a single user prompt and return the text of the first content block.
    pub async fn complete(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<String> {
        let request = MessagesRequest::new(model, max_tokens).message(Message::user(prompt));

        let response = self.create_message(request).await?;

        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| AnthropicError::Parse("Response has no text content".into()))
    }
}
