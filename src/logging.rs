//! Structured logging through `tracing`.
//!
//! Records go to a daily-rotating file in the local data directory, written
//! from a background thread, so they never interleave with topic output on
//! stdout.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when neither `RUST_LOG` nor the config file sets one.
const DEFAULT_LOG_FILTER: &str = "rustedge=info,warn";

const LOG_FILE_PREFIX: &str = "rustedge.log";

/// Keeps the background writer alive. Dropping it flushes buffered records.
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Install the global subscriber.
///
/// The filter is taken from `RUST_LOG` first, then `configured_filter`, then
/// [`DEFAULT_LOG_FILTER`]. A directive that fails to parse is skipped.
///
/// Log files live under the platform's local data directory:
/// - Linux: `~/.local/share/rustedge/logs/`
/// - macOS: `~/Library/Application Support/rustedge/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\rustedge\logs\`
///
/// # Errors
///
/// Fails if the log directory cannot be determined or created, or if a
/// global subscriber is already set.
pub fn init(configured_filter: Option<&str>) -> anyhow::Result<LogGuard> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_value.as_deref(), configured_filter);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rustedge starting");
    tracing::debug!(log_dir = %log_dir.display(), "logging to file");

    Ok(LogGuard { _worker: worker })
}

fn build_filter(env_value: Option<&str>, configured: Option<&str>) -> EnvFilter {
    env_value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| configured.and_then(|v| EnvFilter::try_new(v).ok()))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine local data directory"))?;

    Ok(base_dir.join("rustedge").join("logs"))
}

/// Where log files are written, if the platform has a data directory.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Record shutdown, then flush by dropping the guard.
pub fn shutdown(guard: Option<LogGuard>) {
    tracing::info!("rustedge shutting down");
    drop(guard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_has_expected_structure() {
        if let Some(dir) = log_directory() {
            assert!(dir.ends_with("rustedge/logs"));
        }
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_env_filter_wins() {
        assert_eq!(
            build_filter(Some("trace"), Some("debug")).to_string(),
            "trace"
        );
    }

    #[test]
    fn test_configured_filter_used_without_env() {
        assert_eq!(build_filter(None, Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_invalid_env_falls_through() {
        assert_eq!(
            build_filter(Some("rustedge=loud"), Some("warn")).to_string(),
            "warn"
        );
    }
}
