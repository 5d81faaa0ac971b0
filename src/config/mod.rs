mod defaults;
mod io;
mod types;
mod validation;

pub use io::*;
pub use types::*;
pub use validation::*;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Top-level Spotlight configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub content_api: ContentApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, environment, and defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(PathBuf::from).or_else(find_config_file);

        let mut config = match config_path {
            Some(ref p) => {
                info!("Loading config from {}", p.display());
                load_config_file(p)?
            }
            None => {
                info!("No config file found, using defaults");
                Config::default()
            }
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Write default configuration to a file.
    pub fn write_default(path: &str) -> Result<()> {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Apply environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(user) = std::env::var("SPOTLIGHT_GITHUB_USER") {
            self.github.user = user;
        }
        if let Ok(base) = std::env::var("SPOTLIGHT_GITHUB_API_BASE") {
            self.github.api_base = base;
        }
        if let Ok(base) = std::env::var("SPOTLIGHT_CONTENT_API_URL") {
            self.content_api.base_url = base;
        }
        if let Ok(key) = std::env::var("SPOTLIGHT_CONTENT_API_KEY") {
            self.content_api.anon_key = Some(key);
        }
    }

    /// Validate this configuration.
    pub fn validate(&self) -> Result<()> {
        validate_config_object(self)
    }
}
