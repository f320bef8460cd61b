//! Console styling helpers.
//!
//! Every helper returns a plain `String` so callers can compose lines before
//! writing them anywhere. A disabled theme returns the text unchanged.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Text styling for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Theme {
    /// Create a theme, optionally with styling turned off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A theme that never emits escape sequences.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Whether escape sequences are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(
        &self,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
        attrs: &[Attribute],
    ) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let mut style = ContentStyle::new();
        style.foreground_color = fg;
        style.background_color = bg;
        for attr in attrs {
            style.attributes.set(*attr);
        }
        style.apply(text).to_string()
    }

    fn fg(&self, text: &str, color: Color) -> String {
        self.paint(text, Some(color), None, &[])
    }

    pub fn red(&self, text: &str) -> String {
        self.fg(text, Color::DarkRed)
    }

    pub fn green(&self, text: &str) -> String {
        self.fg(text, Color::DarkGreen)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.fg(text, Color::DarkYellow)
    }

    pub fn blue(&self, text: &str) -> String {
        self.fg(text, Color::DarkBlue)
    }

    pub fn purple(&self, text: &str) -> String {
        self.fg(text, Color::DarkMagenta)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.fg(text, Color::DarkCyan)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, None, None, &[Attribute::Bold])
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, None, None, &[Attribute::Dim])
    }

    /// Green text with a check mark.
    pub fn success(&self, text: &str) -> String {
        self.green(&format!("✅ {}", text))
    }

    /// Yellow text with a warning sign.
    pub fn warning(&self, text: &str) -> String {
        self.yellow(&format!("⚠️  {}", text))
    }

    /// Red text with a cross.
    pub fn error(&self, text: &str) -> String {
        self.red(&format!("❌ {}", text))
    }

    /// Blue text with an info sign.
    pub fn info(&self, text: &str) -> String {
        self.blue(&format!("ℹ️  {}", text))
    }

    /// Bold cyan, used for topic banners.
    pub fn header(&self, text: &str) -> String {
        self.paint(text, Some(Color::DarkCyan), None, &[Attribute::Bold])
    }

    /// Bold yellow, used for section titles inside a topic.
    pub fn subtitle(&self, text: &str) -> String {
        self.paint(text, Some(Color::DarkYellow), None, &[Attribute::Bold])
    }

    /// Inline code: white on blue, padded by one space.
    pub fn code(&self, text: &str) -> String {
        self.paint(
            &format!(" {} ", text),
            Some(Color::White),
            Some(Color::DarkBlue),
            &[],
        )
    }

    /// A cyan `=` rule `width + 1` characters wide.
    pub fn rule(&self, width: usize) -> String {
        self.cyan(&"=".repeat(width + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_returns_text_verbatim() {
        let t = Theme::plain();
        assert_eq!(t.red("x"), "x");
        assert_eq!(t.bold("x"), "x");
        assert_eq!(t.header("Banner"), "Banner");
        assert_eq!(t.subtitle("Section"), "Section");
    }

    #[test]
    fn test_status_prefixes() {
        let t = Theme::plain();
        assert_eq!(t.success("done"), "✅ done");
        assert_eq!(t.warning("careful"), "⚠️  careful");
        assert_eq!(t.error("failed"), "❌ failed");
        assert_eq!(t.info("note"), "ℹ️  note");
    }

    #[test]
    fn test_code_is_padded() {
        assert_eq!(Theme::plain().code("main"), " main ");
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(Theme::plain().rule(40), "=".repeat(41));
    }

    #[test]
    fn test_enabled_theme_emits_escapes() {
        let t = Theme::new(true);
        let bold = t.bold("text");
        assert!(bold.contains("text"));
        assert!(bold.contains('\u{1b}'));
        assert_ne!(bold, "text");
    }

    #[test]
    fn test_default_is_enabled() {
        assert!(Theme::default().is_enabled());
        assert!(!Theme::plain().is_enabled());
    }
}
