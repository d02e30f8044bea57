mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error_full};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::Report;

/// Trait for formatting a report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Checks if `NO_COLOR` environment variable is set.
/// Per <https://no-color.org>: presence of the variable (any value) disables color.
pub(crate) fn is_no_color_set() -> bool {
    std::env::var("NO_COLOR").is_ok()
}
