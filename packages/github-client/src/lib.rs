//! Pure GitHub repository contents API client.
//!
//! Reads and writes single files through the contents API. Writes carry the
//! blob sha that was read, so GitHub rejects them if the file moved on in the
//! meantime.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::{content, GitHubClient, UpdateFileRequest};
//!
//! let client = GitHubClient::new(token);
//!
//! let file = client.get_file("owner/site", "index.html", "main").await?;
//! let html = content::decode_content(&file.content)?;
//!
//! client
//!     .update_file("owner/site", "index.html", &UpdateFileRequest {
//!         message: "Update index".into(),
//!         content: content::encode_content(&html),
//!         sha: file.sha,
//!         branch: "main".into(),
//!     })
//!     .await?;
//! ```

pub mod content;
pub mod error;
pub mod types;

pub use error::{GitHubError, Result};
pub use types::{CommitRef, FileContents, UpdateFileRequest, UpdateFileResponse};

use reqwest::{header, Response, StatusCode};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "Showcase-AutoSubmit";
const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (GitHub Enterprise, local fakes).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn contents_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.base_url,
            repo,
            path.trim_start_matches('/')
        )
    }

    /// Fetch a file and its blob sha from `branch`.
    pub async fn get_file(&self, repo: &str, path: &str, branch: &str) -> Result<FileContents> {
        let resp = self
            .client
            .get(self.contents_url(repo, path))
            .query(&[("ref", branch)])
            .bearer_auth(&self.token)
            .header(header::ACCEPT, ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let resp = check_status(resp).await?;

        let file: FileContents = resp
            .json()
            .await
            .map_err(|e| GitHubError::Parse(e.to_string()))?;

        tracing::debug!(repo, path, sha = %file.sha, "Fetched file contents");
        Ok(file)
    }

    /// Write a file, conditioned on `request.sha` still being current.
    ///
    /// A stale sha comes back as [`GitHubError::Conflict`]. Nothing is retried.
    pub async fn update_file(
        &self,
        repo: &str,
        path: &str,
        request: &UpdateFileRequest,
    ) -> Result<UpdateFileResponse> {
        let resp = self
            .client
            .put(self.contents_url(repo, path))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .json(request)
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let resp = check_status(resp).await?;

        let updated: UpdateFileResponse = resp
            .json()
            .await
            .map_err(|e| GitHubError::Parse(e.to_string()))?;

        tracing::info!(
            repo,
            path,
            commit = %updated.commit.sha,
            url = updated.commit.html_url.as_deref().unwrap_or_default(),
            "Committed file update"
        );
        Ok(updated)
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = %status, error = %body, "GitHub API error");

    match status {
        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => Err(GitHubError::Conflict(body)),
        _ => Err(GitHubError::Api {
            status: status.as_u16(),
            message: body,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    const FILE_ROUTE: &str = "/repos/owner/site/contents/index.html";

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn spawn_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Contents endpoint answering both GET and PUT with a fixed status and body.
    fn contents_api(status: StatusCode, body: &'static str) -> Router {
        Router::new().route(
            FILE_ROUTE,
            get(move || async move { (status, body) }).put(move || async move { (status, body) }),
        )
    }

    fn update_request() -> UpdateFileRequest {
        UpdateFileRequest {
            message: "Add project: Demo".into(),
            content: content::encode_content("<html></html>"),
            sha: "abc123".into(),
            branch: "main".into(),
        }
    }

    #[test]
    fn test_contents_url() {
        let client = GitHubClient::new("ghp_test").with_base_url("https://ghe.local/api/v3/");

        assert_eq!(
            client.contents_url("owner/site", "/index.html"),
            "https://ghe.local/api/v3/repos/owner/site/contents/index.html"
        );
    }

    #[test]
    fn test_update_request_wire_format() {
        let json = serde_json::to_value(update_request()).unwrap();

        assert_eq!(json["message"], "Add project: Demo");
        assert_eq!(json["content"], "PGh0bWw+PC9odG1sPg==");
        assert_eq!(json["sha"], "abc123");
        assert_eq!(json["branch"], "main");
    }

    #[test]
    fn test_file_contents_parse() {
        let raw = r#"{
            "name": "index.html",
            "path": "index.html",
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "size": 5,
            "type": "file",
            "content": "PGgx\nPg==\n",
            "encoding": "base64"
        }"#;

        let file: FileContents = serde_json::from_str(raw).unwrap();

        assert_eq!(file.sha, "3d21ec53a331a6f037a91c368710b99387d012c1");
        assert_eq!(content::decode_content(&file.content).unwrap(), "<h1>");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let client = GitHubClient::new("ghp_test").with_base_url("http://127.0.0.1:1");

        let result = tokio_test::block_on(client.get_file("owner/site", "index.html", "main"));

        assert!(matches!(result, Err(GitHubError::Network(_))));
    }

    #[tokio::test]
    async fn test_get_file_sends_ref_and_auth() {
        let router = Router::new().route(
            FILE_ROUTE,
            get(
                |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let branch = query.get("ref").cloned().unwrap_or_default();
                    Json(json!({
                        "sha": format!("{auth}|{branch}"),
                        "content": content::encode_content("<h1>Showcase</h1>"),
                    }))
                },
            ),
        );
        let base = spawn_api(router).await;
        let client = GitHubClient::new("ghp_test").with_base_url(base);

        let file = client.get_file("owner/site", "index.html", "main").await.unwrap();

        assert_eq!(file.sha, "Bearer ghp_test|main");
        assert_eq!(
            content::decode_content(&file.content).unwrap(),
            "<h1>Showcase</h1>"
        );
    }

    #[tokio::test]
    async fn test_update_file_sends_sha_and_reads_commit() {
        let router = Router::new().route(
            FILE_ROUTE,
            axum::routing::put(|Json(body): Json<Value>| async move {
                Json(json!({
                    "content": {"path": "index.html", "sha": "new-blob"},
                    "commit": {"sha": format!("commit-on-{}", body["sha"].as_str().unwrap_or_default())}
                }))
            }),
        );
        let base = spawn_api(router).await;
        let client = GitHubClient::new("ghp_test").with_base_url(base);

        let updated = client
            .update_file("owner/site", "index.html", &update_request())
            .await
            .unwrap();

        assert_eq!(updated.commit.sha, "commit-on-abc123");
        assert_eq!(updated.commit.html_url, None);
    }

    #[tokio::test]
    async fn test_stale_sha_is_conflict() {
        for status in [StatusCode::CONFLICT, StatusCode::UNPROCESSABLE_ENTITY] {
            let base = spawn_api(contents_api(status, "sha does not match")).await;
            let client = GitHubClient::new("ghp_test").with_base_url(base);

            let result = client
                .update_file("owner/site", "index.html", &update_request())
                .await;

            match result {
                Err(GitHubError::Conflict(message)) => assert_eq!(message, "sha does not match"),
                other => panic!("expected Conflict for {status}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_other_error_status_is_api_error() {
        let base = spawn_api(contents_api(StatusCode::INTERNAL_SERVER_ERROR, "boom")).await;
        let client = GitHubClient::new("ghp_test").with_base_url(base);

        let read = client.get_file("owner/site", "index.html", "main").await;
        let write = client
            .update_file("owner/site", "index.html", &update_request())
            .await;

        assert!(matches!(read, Err(GitHubError::Api { status: 500, .. })));
        assert!(matches!(write, Err(GitHubError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_missing_file_is_api_error_not_conflict() {
        let base = spawn_api(contents_api(StatusCode::NOT_FOUND, "Not Found")).await;
        let client = GitHubClient::new("ghp_test").with_base_url(base);

        let result = client.get_file("owner/site", "index.html", "main").await;

        assert!(matches!(result, Err(GitHubError::Api { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_unexpected_success_body_is_parse_error() {
        let base = spawn_api(contents_api(StatusCode::OK, r#"{"message": "ok"}"#)).await;
        let client = GitHubClient::new("ghp_test").with_base_url(base);

        let read = client.get_file("owner/site", "index.html", "main").await;
        let write = client
            .update_file("owner/site", "index.html", &update_request())
            .await;

        assert!(matches!(read, Err(GitHubError::Parse(_))));
        assert!(matches!(write, Err(GitHubError::Parse(_))));
    }
}
