//! Runtime configuration for fetching and writing schedules.

use std::path::PathBuf;
use std::time::Duration;

/// Root of the per-country schedule pages.
pub const DEFAULT_BASE_URL: &str = "https://maps.apple.com/imagecollection/";
/// Directory the per-country JSON files are written to.
pub const DEFAULT_OUT_DIR: &str = "schedules";
/// Pages are requested in this language so headings stay comparable.
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub out_dir: PathBuf,
    /// Sent as `Accept-Language`.
    pub language: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("imagery-schedule/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://maps.apple.com/imagecollection/");
        assert_eq!(config.out_dir, PathBuf::from("schedules"));
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("imagery-schedule/"));
    }
}
