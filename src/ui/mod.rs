//! Console presentation.
//!
//! Styling helpers and the help listing. Nothing in here writes to the
//! terminal directly.

pub mod help;
pub mod theme;

pub use theme::Theme;
