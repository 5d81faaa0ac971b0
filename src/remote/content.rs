use super::{error_body, FetchError};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SERVICE: &str = "content-api";

// ============================================================================
// Row Types
// ============================================================================

/// A photo row from the hosted content database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// A video row from the hosted content database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub video_url: String,
}

/// A writing row from the hosted content database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WritingRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
}

// ============================================================================
// Client
// ============================================================================

/// Read-only client for the hosted content database's REST surface.
///
/// Reads go through `GET {base}/rest/v1/{table}?select=*` with the anon
/// key attached when configured. The tables are assumed publicly
/// readable; writes belong to the out-of-scope admin surface.
pub struct ContentApiClient {
    client: Client,
    base_url: String,
    anon_key: Option<String>,
}

impl ContentApiClient {
    pub fn new(base_url: String, anon_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            anon_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/rest/v1/{}?select=*", base, table)
    }

    /// Fetch every row of `table`, decoded as `T`.
    pub async fn rows<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, FetchError> {
        let url = self.table_url(table);
        debug!(%url, "fetching content rows");

        let mut req = self.client.get(&url).header("Accept", "application/json");
        if let Some(ref key) = self.anon_key {
            req = req
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let resp = req
            .send()
            .await
            .map_err(|source| FetchError::Transport { service: SERVICE, source })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = error_body(resp).await;
            return Err(FetchError::Status { service: SERVICE, status, body });
        }

        resp.json().await.map_err(|source| FetchError::Transport { service: SERVICE, source })
    }

    pub async fn list_photos(&self, table: &str) -> Result<Vec<PhotoRow>, FetchError> {
        self.rows(table).await
    }

    pub async fn list_videos(&self, table: &str) -> Result<Vec<VideoRow>, FetchError> {
        self.rows(table).await
    }

    pub async fn list_writings(&self, table: &str) -> Result<Vec<WritingRow>, FetchError> {
        self.rows(table).await
    }
}
