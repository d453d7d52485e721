//! Color theme for consistent output

use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for informational messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Color for command ids
pub fn command_id(id: &str) -> ColoredString {
    id.bold()
}

/// Color for paths relative to the docs root
pub fn path(p: &str) -> ColoredString {
    p.dimmed()
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for progress
pub fn arrow_symbol() -> &'static str {
    "→"
}
