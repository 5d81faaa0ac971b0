//! Default configuration values. Functions rather than consts where
//! serde's `default =` attribute needs them.

use crate::nav;

/// The portfolio account whose public repos feed the Projects source.
pub fn github_user() -> String {
    "niya-shroff".to_string()
}

pub fn github_api_base() -> String {
    "https://api.github.com".to_string()
}

pub fn photos_table() -> String {
    "photos".to_string()
}

pub fn videos_table() -> String {
    "videos".to_string()
}

pub fn writings_table() -> String {
    "writings".to_string()
}

pub fn scroll_settle_delay_ms() -> u64 {
    nav::SCROLL_SETTLE_DELAY.as_millis() as u64
}

pub fn highlight_duration_ms() -> u64 {
    nav::HIGHLIGHT_DURATION.as_millis() as u64
}

pub fn log_level() -> String {
    "info".to_string()
}
