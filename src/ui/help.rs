//! Usage listing shown when no topic, or an unknown topic, is given.
//!
//! Rendering is a pure function of the registry: it builds the lines and
//! leaves printing to the caller.

use crate::commands::{Registry, ALL_TOPIC};
use crate::ui::theme::Theme;

/// Program name used in the usage and example lines.
pub const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Description shown next to the `all` meta-topic.
const ALL_DESCRIPTION: &str = "Run all examples";

/// Width of the rule under the title.
const RULE_WIDTH: usize = 40;

/// Build the help listing.
///
/// Produces a title block, one line per registered topic in registration
/// order, the `all` meta-topic, and a closing example invocation.
pub fn render(registry: &Registry, theme: &Theme) -> Vec<String> {
    let width = registry
        .all()
        .iter()
        .map(|entry| entry.key().chars().count())
        .chain(std::iter::once(ALL_TOPIC.len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        theme.header("🦀 RustEdge: Rust from Basics to Mastery"),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        theme.rule(RULE_WIDTH),
        format!("{} {} <topic>", theme.bold("Usage:"), PROGRAM),
        String::new(),
        theme.subtitle("Available topics:"),
    ];

    for entry in registry.all() {
        lines.push(topic_line(theme, entry.key(), entry.description(), width));
    }
    lines.push(topic_line(theme, ALL_TOPIC, ALL_DESCRIPTION, width));

    lines.push(String::new());
    lines.push(theme.info(&format!("Example: {} json", PROGRAM)));

    lines
}

fn topic_line(theme: &Theme, key: &str, description: &str, width: usize) -> String {
    // Pad before painting so escape sequences don't count toward the width
    let padded = format!("{:<width$}", key, width = width);
    format!("  {} - {}", theme.yellow(&padded), description)
}
