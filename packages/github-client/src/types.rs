use serde::{Deserialize, Serialize};

/// A file as returned by `GET /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContents {
    pub sha: String,
    /// Base64, wrapped with newlines.
    pub content: String,
}

/// Body of `PUT /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateFileRequest {
    pub message: String,
    /// Base64 of the new file content.
    pub content: String,
    /// Blob sha the update is based on.
    pub sha: String,
    pub branch: String,
}

/// Response of a successful update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFileResponse {
    pub commit: CommitRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
}
