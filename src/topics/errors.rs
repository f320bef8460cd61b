//! Error handling with `Result`, `?`, `thiserror` and `anyhow`.

use std::error::Error as StdError;
use std::io::{self, Write};
use std::num::ParseIntError;

use anyhow::Context;
use thiserror::Error;

use super::section;
use crate::ui::Theme;

/// Errors from parsing a `key=value` setting.
#[derive(Debug, Error, PartialEq)]
enum SettingError {
    #[error("missing '=' in {0:?}")]
    MissingSeparator(String),

    #[error("empty key")]
    EmptyKey,

    #[error("invalid number for '{key}'")]
    InvalidNumber {
        key: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{key}' must be at most {max}, got {value}")]
    OutOfRange { key: String, value: u32, max: u32 },
}

const MAX_VALUE: u32 = 1000;

/// Parse `key=value` where value is a number up to [`MAX_VALUE`].
fn parse_setting(line: &str) -> Result<(String, u32), SettingError> {
    let (key, raw) = line
        .split_once('=')
        .ok_or_else(|| SettingError::MissingSeparator(line.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(SettingError::EmptyKey);
    }

    let value: u32 = raw.trim().parse().map_err(|source| SettingError::InvalidNumber {
        key: key.to_string(),
        source,
    })?;

    if value > MAX_VALUE {
        return Err(SettingError::OutOfRange {
            key: key.to_string(),
            value,
            max: MAX_VALUE,
        });
    }

    Ok((key.to_string(), value))
}

/// Parse every line, stopping at the first failure.
fn parse_all(lines: &[&str]) -> Result<Vec<(String, u32)>, SettingError> {
    lines.iter().map(|line| parse_setting(line)).collect()
}

/// Application-level code adds context with `anyhow`.
fn load_limits(lines: &[&str]) -> anyhow::Result<u32> {
    let settings = parse_all(lines).context("failed to load limits")?;
    let total: u32 = settings.iter().map(|(_, v)| v).sum();
    Ok(total)
}

/// Render an error and every source beneath it.
fn chain(err: &dyn StdError) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        messages.push(cause.to_string());
        current = cause.source();
    }
    messages
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Result and match")?;
    match parse_setting("workers=8") {
        Ok((key, value)) => writeln!(out, "{}", t.success(&format!("{} = {}", key, value)))?,
        Err(e) => writeln!(out, "{}", t.error(&e.to_string()))?,
    }

    section(out, t, "2. Typed error variants")?;
    for input in ["timeout", "=5", "retries=many", "burst=5000"] {
        match parse_setting(input) {
            Ok(pair) => writeln!(out, "  {:?} -> {:?}", input, pair)?,
            Err(e) => writeln!(out, "  {:?} -> {}", input, t.error(&e.to_string()))?,
        }
    }

    section(out, t, "3. Propagating with ?")?;
    writeln!(out, "parse_all(ok) = {:?}", parse_all(&["a=1", "b=2"]))?;
    writeln!(
        out,
        "parse_all(bad) = {:?}",
        parse_all(&["a=1", "b"]).map_err(|e| e.to_string())
    )?;

    section(out, t, "4. Error chains")?;
    if let Err(e) = parse_setting("port=80x") {
        for (depth, message) in chain(&e).iter().enumerate() {
            writeln!(out, "  {}{}", "  ".repeat(depth), message)?;
        }
    }

    section(out, t, "5. Adding context with anyhow")?;
    match load_limits(&["a=10", "b=20"]) {
        Ok(total) => writeln!(out, "total limits = {}", total)?,
        Err(e) => writeln!(out, "{:#}", e)?,
    }
    if let Err(e) = load_limits(&["a=10", "b=lots"]) {
        writeln!(out, "{}", t.error(&format!("{:#}", e)))?;
    }
    writeln!(
        out,
        "{}",
        t.info("Libraries expose typed errors; applications add context")
    )?;

    Ok(())
}
