use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_MODERATION_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_MODERATION_MAX_TOKENS: u32 = 256;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub anthropic_api_key: String,
    pub anthropic_base_url: Option<String>,
    pub moderation_model: String,
    pub moderation_max_tokens: u32,
    pub github_token: String,
    pub github_api_url: Option<String>,
    /// `owner/name` of the repository holding the site
    pub showcase_repo: String,
    pub showcase_path: String,
    pub showcase_branch: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let showcase_repo = env::var("SHOWCASE_REPO").context("SHOWCASE_REPO must be set")?;
        validate_repo(&showcase_repo)?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8787".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            anthropic_api_key: env::var("ANTHROPIC_API_KEY")
                .context("ANTHROPIC_API_KEY must be set")?,
            anthropic_base_url: env::var("ANTHROPIC_BASE_URL").ok(),
            moderation_model: env::var("MODERATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODERATION_MODEL.to_string()),
            moderation_max_tokens: match env::var("MODERATION_MAX_TOKENS") {
                Ok(raw) => raw
                    .parse()
                    .context("MODERATION_MAX_TOKENS must be a valid number")?,
                Err(_) => DEFAULT_MODERATION_MAX_TOKENS,
            },
            github_token: env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?,
            github_api_url: env::var("GITHUB_API_URL").ok(),
            showcase_repo,
            showcase_path: env::var("SHOWCASE_PATH").unwrap_or_else(|_| "index.html".to_string()),
            showcase_branch: env::var("SHOWCASE_BRANCH").unwrap_or_else(|_| "main".to_string()),
        })
    }
}

/// Repository must look like `owner/name`.
pub fn validate_repo(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => bail!("SHOWCASE_REPO must be in the form owner/name, got {:?}", repo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_repo() {
        assert!(validate_repo("owner/site").is_ok());
        assert!(validate_repo("owner").is_err());
        assert!(validate_repo("/site").is_err());
        assert!(validate_repo("owner/").is_err());
        assert!(validate_repo("owner/site/extra").is_err());
    }
}
