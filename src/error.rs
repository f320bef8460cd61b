//! Centralized error types for RustEdge.
//!
//! Aggregates the per-module error enums into one application error with
//! user-facing messages. Unknown topics are not errors; they are a dispatch
//! outcome.

use std::process::ExitCode;

use thiserror::Error;

use crate::commands::RegistryError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The topic table could not be built.
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// IO errors (writing to the console, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Using default settings.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check it is readable.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Registry(e) => format!("Topic table is misconfigured: {}", e),
            AppError::Io(_) => "Could not write output.".to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Check if the process can keep going after this error.
    ///
    /// A broken configuration falls back to defaults; a broken topic table
    /// cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_registry_error() {
        let err: AppError = RegistryError::DuplicateKey("json".to_string()).into();
        assert!(matches!(
            err,
            AppError::Registry(RegistryError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_user_message_duplicate_topic() {
        let err = AppError::Registry(RegistryError::DuplicateKey("json".to_string()));
        let msg = err.user_message();
        assert!(msg.contains("misconfigured"));
        assert!(msg.contains("json"));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError("bad width".to_string()));
        assert_eq!(err.user_message(), "Configuration error: bad width");
    }

    #[test]
    fn test_recoverable() {
        assert!(AppError::Config(ConfigError::NoConfigDir).is_recoverable());
        let registry = AppError::Registry(RegistryError::EmptyKey);
        assert!(!registry.is_recoverable());
        assert!(!AppError::other("x").is_recoverable());
    }

    #[test]
    fn test_fatal_exit_code() {
        let err = AppError::Registry(RegistryError::EmptyKey);
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
    }

    #[test]
    fn test_other_error() {
        let err = AppError::other("something went wrong");
        assert_eq!(err.user_message(), "something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
