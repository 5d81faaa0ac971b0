use super::{error_body, FetchError};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SERVICE: &str = "github";

/// Fields of a repository we actually use. Everything else GitHub sends
/// is ignored at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client for the public repo listing of a fixed account. No auth, no
/// pagination beyond the API's default page size, no retry.
pub struct GithubClient {
    client: Client,
    base_url: String,
    user: String,
}

impl GithubClient {
    pub fn new(base_url: String, user: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            user,
        }
    }

    fn repos_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/users/{}/repos", base, self.user)
    }

    /// List the account's public repositories.
    pub async fn list_repos(&self) -> Result<Vec<Repo>, FetchError> {
        let url = self.repos_url();
        debug!(%url, "fetching repo listing");

        let resp = self
            .client
            .get(&url)
            // GitHub rejects requests without a User-Agent.
            .header("User-Agent", concat!("spotlight/", env!("CARGO_PKG_VERSION")))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { service: SERVICE, source })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = error_body(resp).await;
            return Err(FetchError::Status { service: SERVICE, status, body });
        }

        // Rate-limit responses come back 200-shaped from some proxies as a
        // JSON object; only a top-level array is a repo listing.
        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|source| FetchError::Transport { service: SERVICE, source })?;

        if !value.is_array() {
            return Err(FetchError::Decode {
                service: SERVICE,
                detail: "expected a JSON array of repositories".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            service: SERVICE,
            detail: e.to_string(),
        })
    }
}
