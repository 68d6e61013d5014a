// ABOUTME: Centralized stderr messages for the few things worth telling the user
// ABOUTME: Keeps stdout reserved for the card itself

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// User-facing diagnostics written to stderr
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format("error:", message, Level::Error));
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.format("warning:", message, Level::Warning));
    }

    fn format(&self, label: &str, message: &str, level: Level) -> String {
        if !self.use_color {
            return format!("{} {}", label, message);
        }

        match level {
            Level::Error => format!("{} {}", label.red().bold(), message),
            Level::Warning => format!("{} {}", label.yellow().bold(), message),
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}

enum Level {
    Error,
    Warning,
}
