use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::backend::error::ConfigError;

pub const CONFIG_ENV: &str = "LAND_PROPOSALS_CONFIG";
pub const CONFIG_FILE: &str = "land-proposals.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub upload_latency_ms: u64,
    pub toast_duration_ms: u64,
    pub max_file_size_bytes: u64,
    pub accepted_extensions: Vec<String>, // Lowercase, with leading dot
    /// When false the type and size limits are only shown as a hint.
    pub enforce_file_rules: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_latency_ms: 1500,
            toast_duration_ms: 3000,
            max_file_size_bytes: 10 * 1024 * 1024,
            accepted_extensions: [".pdf", ".doc", ".docx", ".jpg", ".jpeg", ".png"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            enforce_file_rules: false,
        }
    }
}

impl AppConfig {
    pub fn upload_latency(&self) -> Duration {
        Duration::from_millis(self.upload_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions.join(",")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Looks at `$LAND_PROPOSALS_CONFIG`, then `./land-proposals.json`.
    /// Missing files mean defaults; unreadable ones are reported.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            tracing::info!("Loading config from {}", path);
            return Self::from_path(path);
        }
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            tracing::info!("Loading config from {}", CONFIG_FILE);
            return Self::from_path(local);
        }
        Ok(Self::default())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.upload_latency(), Duration::from_millis(1500));
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.max_file_size_bytes, 10_485_760);
        assert!(!config.enforce_file_rules);
        assert_eq!(config.accept_attr(), ".pdf,.doc,.docx,.jpg,.jpeg,.png");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "upload_latency_ms": 20, "enforce_file_rules": true }}"#).unwrap();

        let config = AppConfig::from_path(file.path()).expect("Failed to load config");
        assert_eq!(config.upload_latency_ms, 20);
        assert!(config.enforce_file_rules);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.accepted_extensions.len(), 6);
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(AppConfig::from_path(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
