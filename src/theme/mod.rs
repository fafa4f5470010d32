//! Color theme for CLI status output
//!
//! Status lines highlight paths and commands the way the rest of the CLI
//! does. Colors are dropped when `NO_COLOR` is set.

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output - exposed for clap styling
pub mod ansi {
    /// Green color (ANSI 32) - used for accent/info
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow color (ANSI 33) - used for paths the user should edit
    pub const YELLOW: &str = "\x1b[33m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Escape codes for each text role. Empty codes mean plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: &'static str,
    pub highlight: &'static str,
    pub error: &'static str,
    pub secondary: &'static str,
    pub reset: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ansi::GREEN,
            highlight: ansi::YELLOW,
            error: ansi::RED,
            secondary: ansi::DARK_GRAY,
            reset: ANSI_RESET,
        }
    }
}

impl Theme {
    /// A theme that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            accent: "",
            highlight: "",
            error: "",
            secondary: "",
            reset: "",
        }
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the highlight color.
    pub fn highlight_text(&self, text: &str) -> String {
        self.paint(self.highlight, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.secondary, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, self.reset)
        }
    }
}

/// Theme for the current process: plain when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    }
}
