use super::defaults;
use serde::{Deserialize, Serialize};

// ============================================================================
// GitHub Configuration
// ============================================================================

/// The public code-hosting account whose repositories feed the Projects
/// source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubConfig {
    #[serde(default = "defaults::github_user")]
    pub user: String,
    #[serde(default = "defaults::github_api_base")]
    pub api_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            user: defaults::github_user(),
            api_base: defaults::github_api_base(),
        }
    }
}

// ============================================================================
// Content API Configuration
// ============================================================================

/// The hosted content database's REST surface. Left unconfigured (empty
/// `baseUrl`), the photo/video/writing sources simply never fetch and
/// contribute zero results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub anon_key: Option<String>,
    #[serde(default = "defaults::photos_table")]
    pub photos_table: String,
    #[serde(default = "defaults::videos_table")]
    pub videos_table: String,
    #[serde(default = "defaults::writings_table")]
    pub writings_table: String,
}

impl ContentApiConfig {
    /// Whether a content database has been configured at all.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: None,
            photos_table: defaults::photos_table(),
            videos_table: defaults::videos_table(),
            writings_table: defaults::writings_table(),
        }
    }
}

// ============================================================================
// Search / Logging Configuration
// ============================================================================

/// Timing knobs for the post-navigation scroll/highlight sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default = "defaults::scroll_settle_delay_ms")]
    pub scroll_settle_delay_ms: u64,
    #[serde(default = "defaults::highlight_duration_ms")]
    pub highlight_duration_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scroll_settle_delay_ms: defaults::scroll_settle_delay_ms(),
            highlight_duration_ms: defaults::highlight_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}
