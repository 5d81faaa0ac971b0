use super::Config;
use anyhow::Result;
use tracing::warn;
use url::Url;

/// Validation errors for configuration.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn check_http_url(errors: &mut Vec<ConfigValidationError>, path: &str, value: &str) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ConfigValidationError {
            path: path.to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ConfigValidationError {
            path: path.to_string(),
            message: format!("Not a valid URL: {e}"),
        }),
    }
}

/// Validate a configuration object.
pub fn validate_config(config: &Config) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    if config.github.user.trim().is_empty() {
        errors.push(ConfigValidationError {
            path: "github.user".to_string(),
            message: "GitHub user is required".to_string(),
        });
    }
    check_http_url(&mut errors, "github.apiBase", &config.github.api_base);

    if config.content_api.is_configured() {
        check_http_url(&mut errors, "contentApi.baseUrl", &config.content_api.base_url);
        for (path, table) in [
            ("contentApi.photosTable", &config.content_api.photos_table),
            ("contentApi.videosTable", &config.content_api.videos_table),
            ("contentApi.writingsTable", &config.content_api.writings_table),
        ] {
            if table.trim().is_empty() {
                errors.push(ConfigValidationError {
                    path: path.to_string(),
                    message: "Table name must not be empty".to_string(),
                });
            }
        }
    } else {
        warn!("Content API is not configured; photo/video/writing sources will stay empty");
    }

    if config.search.highlight_duration_ms == 0 {
        errors.push(ConfigValidationError {
            path: "search.highlightDurationMs".to_string(),
            message: "Highlight duration must be greater than 0".to_string(),
        });
    }

    errors
}

/// Validate configuration and return Result.
pub fn validate_config_object(config: &Config) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("Configuration validation failed:\n{}", messages.join("\n"));
    }
}
