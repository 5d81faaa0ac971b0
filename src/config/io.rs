use super::Config;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Maximum size for a config file (1 MB). A search config has no business
/// being larger.
pub const MAX_CONFIG_FILE_BYTES: u64 = 1024 * 1024;

/// Candidate config file names, checked in the working directory first
/// and then the user config directory.
const CONFIG_FILE_NAMES: &[&str] = &["spotlight.json", "spotlight.json5", "spotlight.yaml"];

/// Locate a config file: `./spotlight.{json,json5,yaml}`, then
/// `<user config dir>/spotlight/spotlight.json`.
pub fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(dir) = dirs::config_dir() {
        let path = dir.join("spotlight").join("spotlight.json");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Read and parse a configuration file. Format is chosen by extension:
/// YAML for `.yaml`/`.yml`, JSON5 otherwise (JSON5 is a superset of
/// JSON, so plain `.json` files parse too).
pub fn load_config_file(path: &Path) -> Result<Config> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot stat config file '{}'", path.display()))?;
    if metadata.len() > MAX_CONFIG_FILE_BYTES {
        bail!(
            "Config file '{}' is {} bytes, exceeds limit of {} bytes",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_BYTES,
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let value: serde_json::Value = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in '{}'", path.display()))?,
        _ => json5::from_str(&content)
            .with_context(|| format!("Invalid JSON in '{}'", path.display()))?,
    };

    serde_json::from_value(value)
        .with_context(|| format!("Config file '{}' does not match the expected shape", path.display()))
}
