//! Configuration management for UniHive

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Leaderboard length used when nothing else is configured
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Caption word limit used when nothing else is configured
pub const DEFAULT_MAX_CAPTION_WORDS: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub viewer: ViewerConfig,
    pub feed: FeedConfig,
    pub validation: ValidationConfig,
    pub leaderboard: LeaderboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Author name recorded on comments the viewer submits
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// Append the static seed posts after store content
    pub include_seed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_caption_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub size: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { include_seed: true }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_caption_words: DEFAULT_MAX_CAPTION_WORDS,
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.viewer.name.trim().is_empty() {
            return Err(ConfigError::MissingField("viewer.name".to_string()).into());
        }
        if self.validation.max_caption_words == 0 {
            return Err(ConfigError::InvalidValue(
                "validation.max_caption_words must be at least 1".to_string(),
            )
            .into());
        }
        if self.leaderboard.size == 0 {
            return Err(ConfigError::InvalidValue(
                "leaderboard.size must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("UNIHIVE_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("unihive").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnihiveError;
    use serial_test::serial;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.viewer.name, "You");
        assert!(config.feed.include_seed);
        assert_eq!(config.validation.max_caption_words, 10);
        assert_eq!(config.leaderboard.size, 10);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [leaderboard]
            size = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.leaderboard.size, 3);
        assert_eq!(config.validation.max_caption_words, 10);
    }

    #[test]
    fn test_zero_leaderboard_size_rejected() {
        let result = Config::from_toml_str("[leaderboard]\nsize = 0\n");
        assert!(matches!(
            result,
            Err(UnihiveError::Config(ConfigError::InvalidValue(_)))
        ));
    }

    #[test]
    fn test_blank_viewer_name_rejected() {
        let result = Config::from_toml_str("[viewer]\nname = \"  \"\n");
        assert!(matches!(
            result,
            Err(UnihiveError::Config(ConfigError::MissingField(_)))
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = Config::from_toml_str("[feed\ninclude_seed = true");
        assert!(matches!(
            result,
            Err(UnihiveError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[feed]\ninclude_seed = false\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(!config.feed.include_seed);
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_honours_env() {
        std::env::set_var("UNIHIVE_CONFIG", "/tmp/unihive-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("UNIHIVE_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/unihive-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        std::env::set_var("UNIHIVE_CONFIG", path.to_str().unwrap());
        let config = Config::load();
        std::env::remove_var("UNIHIVE_CONFIG");

        assert_eq!(config.unwrap(), Config::default());
    }
}
