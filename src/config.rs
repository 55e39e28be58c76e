//! Configuration file parser for ~/.config/headlines/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are accepted by serde, but each one is logged as a warning
//! since it is most likely a typo.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::util::MAX_SEARCH_QUERY_LENGTH;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level service configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,

    /// Load the built-in article set at startup.
    pub seed_articles: bool,

    /// JSON file of articles loaded instead of the built-in set.
    pub seed_file: Option<PathBuf>,

    /// Send permissive CORS headers and answer OPTIONS preflights.
    pub cors_enabled: bool,

    /// Longest accepted `search` query, in bytes.
    pub max_search_query_length: usize,

    /// Tracing filter used when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            seed_articles: true,
            seed_file: None,
            cors_enabled: true,
            max_search_query_length: MAX_SEARCH_QUERY_LENGTH,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 6] = [
        "bind_addr",
        "seed_articles",
        "seed_file",
        "cors_enabled",
        "max_search_query_length",
        "log_filter",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content)
    }

    /// Parse TOML text, applying the same defaults as [`Config::load`].
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(bind_addr = %config.bind_addr, seed_articles = config.seed_articles, "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("headlines_config_test_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert!(config.seed_articles);
        assert!(config.seed_file.is_none());
        assert!(config.cors_enabled);
        assert_eq!(config.max_search_query_length, 256);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/headlines_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_returns_default() {
        let path = temp_config("empty", "");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_whitespace_only_returns_default() {
        assert_eq!(Config::parse("   \n  \n  ").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let config = Config::parse("bind_addr = \"0.0.0.0:8080\"\n").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.seed_articles);
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_full_config() {
        let path = temp_config(
            "full",
            r#"
bind_addr = "0.0.0.0:9000"
seed_articles = false
seed_file = "/srv/headlines/articles.json"
cors_enabled = false
max_search_query_length = 64
log_filter = "headlines=debug"
"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert!(!config.seed_articles);
        assert_eq!(
            config.seed_file.as_deref(),
            Some(Path::new("/srv/headlines/articles.json"))
        );
        assert!(!config.cors_enabled);
        assert_eq!(config.max_search_query_length, 64);
        assert_eq!(config.log_filter, "headlines=debug");

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let err = Config::parse("this is not [valid toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let config = Config::parse("cors_enabled = false\ntotally_fake_key = 42\n").unwrap();
        assert!(!config.cors_enabled);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        assert!(Config::parse("seed_articles = \"yes\"\n").is_err());
    }

    #[test]
    fn test_too_large_file_rejected() {
        let path = temp_config("too_large", &"a".repeat(1_048_577));

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
