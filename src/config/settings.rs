//! Presentation and logging settings.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Smallest accepted rule width.
pub const MIN_RULE_WIDTH: usize = 10;

/// Largest accepted rule width.
pub const MAX_RULE_WIDTH: usize = 120;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current process environment.
    pub fn enabled(&self) -> bool {
        self.resolve(
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stdout().is_terminal(),
        )
    }

    fn resolve(&self, no_color: bool, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color && is_terminal,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether to style console output.
    pub color: ColorMode,
    /// Width of the `=` rule printed under topic banners.
    pub rule_width: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            rule_width: 40,
            log_filter: None,
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the rule width is out of
    /// range or the log filter is blank.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RULE_WIDTH..=MAX_RULE_WIDTH).contains(&self.rule_width) {
            return Err(ConfigError::ValidationError(format!(
                "rule_width must be between {} and {}, got {}",
                MIN_RULE_WIDTH, MAX_RULE_WIDTH, self.rule_width
            )));
        }

        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "log_filter cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.color, ColorMode::Auto);
        assert_eq!(settings.rule_width, 40);
    }

    #[test]
    fn test_rule_width_bounds() {
        let mut settings = Settings::default();

        settings.rule_width = MIN_RULE_WIDTH;
        assert!(settings.validate().is_ok());

        settings.rule_width = MAX_RULE_WIDTH;
        assert!(settings.validate().is_ok());

        settings.rule_width = MAX_RULE_WIDTH + 1;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("rule_width"));

        settings.rule_width = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_log_filter_rejected() {
        let settings = Settings {
            log_filter: Some("   ".to_string()),
            ..Settings::default()
        };
        assert!(settings
            .validate()
            .unwrap_err()
            .to_string()
            .contains("log_filter"));
    }

    #[test]
    fn test_explicit_color_modes() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn test_auto_needs_terminal_and_no_no_color() {
        assert!(ColorMode::Auto.resolve(false, true));
        assert!(!ColorMode::Auto.resolve(true, true));
        assert!(!ColorMode::Auto.resolve(false, false));
        assert!(!ColorMode::Auto.resolve(true, false));
    }

    #[test]
    fn test_explicit_modes_ignore_environment() {
        assert!(ColorMode::Always.resolve(true, false));
        assert!(!ColorMode::Never.resolve(false, true));
    }
}
