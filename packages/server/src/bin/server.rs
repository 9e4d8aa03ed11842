//! Showcase submission server
//!
//! Receives submissions from the site's form, moderates them and commits
//! approved cards to the site repository.

use std::sync::Arc;

use anthropic_client::AnthropicClient;
use anyhow::{Context, Result};
use github_client::GitHubClient;
use showcase_core::kernel::{AnthropicAdapter, GitHubContentStore, ServerDeps};
use showcase_core::server::build_app;
use showcase_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,showcase_core=debug,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Showcase submission server");

    let config = Config::from_env().context("Failed to load configuration")?;

    // Moderation model
    let mut anthropic = AnthropicClient::new(config.anthropic_api_key.clone());
    if let Some(url) = &config.anthropic_base_url {
        anthropic = anthropic.with_base_url(url.clone());
    }
    let ai = AnthropicAdapter::new(
        Arc::new(anthropic),
        config.moderation_model.clone(),
        config.moderation_max_tokens,
    );

    // Site repository
    let mut github = GitHubClient::new(config.github_token.clone());
    if let Some(url) = &config.github_api_url {
        github = github.with_base_url(url.clone());
    }
    let content_store = GitHubContentStore::new(
        Arc::new(github),
        config.showcase_repo.clone(),
        config.showcase_branch.clone(),
    );

    tracing::info!(
        repo = %config.showcase_repo,
        path = %config.showcase_path,
        branch = %config.showcase_branch,
        model = %config.moderation_model,
        "Publishing approved submissions"
    );

    let deps = ServerDeps::new(
        Arc::new(ai),
        Arc::new(content_store),
        config.showcase_path.clone(),
    );
    let app = build_app(deps);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
