//! Configuration management for RustEdge.
//!
//! An optional TOML file at `<config_dir>/rustedge/config.toml` tunes
//! presentation and logging. A missing file means defaults.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use settings::Settings;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for our schema.
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds invalid values.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation and logging settings.
    pub settings: Settings,
}

impl Config {
    /// Default location of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("rustedge").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::settings::ColorMode;
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_settings() {
        let config = Config::from_toml(
            r#"
            [settings]
            color = "never"
            rule_width = 60
            log_filter = "rustedge=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.color, ColorMode::Never);
        assert_eq!(config.settings.rule_width, 60);
        assert_eq!(
            config.settings.log_filter.as_deref(),
            Some("rustedge=debug")
        );
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let config = Config::from_toml("[settings]\ncolor = \"always\"\n").unwrap();
        assert_eq!(config.settings.color, ColorMode::Always);
        assert_eq!(config.settings.rule_width, 40);
        assert!(config.settings.log_filter.is_none());
    }

    #[test]
    fn test_unknown_color_mode_is_parse_error() {
        let err = Config::from_toml("[settings]\ncolor = \"rainbow\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_values_are_validation_error() {
        let err = Config::from_toml("[settings]\nrule_width = 500\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nrule_width = 20").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.settings.rule_width, 20);
    }

    #[test]
    fn test_config_path_structure() {
        if let Ok(path) = Config::config_path() {
            assert!(path.ends_with("rustedge/config.toml"));
        }
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.settings.color = ColorMode::Never;
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
