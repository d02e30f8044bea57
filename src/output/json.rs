use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Pretty-printed JSON with `extracted` and `statistics` top-level fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
