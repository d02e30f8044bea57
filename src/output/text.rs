use std::fmt::Write;

use crate::check::Category;
use crate::error::Result;
use crate::report::Report;
use crate::validator::ValidationStat;

use super::{ColorMode, OutputFormatter, ansi, is_no_color_set};

/// Human-readable summary of a report for the terminal.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_stat(&self, out: &mut String, category: Category, count: usize, stat: &ValidationStat) {
        let (icon, color) = if stat.is_clean() {
            ("✓", ansi::GREEN)
        } else {
            ("✗", ansi::RED)
        };
        let label = self.colorize(&format!("{icon} {category:<10}"), color);
        let _ = writeln!(
            out,
            "{label} {count} extracted, {} valid, {} invalid ({:.2}%)",
            stat.valid_count, stat.invalid_count, stat.error_percentage
        );
        for name in &stat.invalid_names {
            let _ = writeln!(out, "    - {}", self.colorize(name, ansi::YELLOW));
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        for (category, names) in report.extracted.iter() {
            if let Some(stat) = report.statistics.get(&category) {
                self.format_stat(&mut out, category, names.len(), stat);
            } else {
                let label = self.colorize(&format!("- {category:<10}"), ansi::CYAN);
                let _ = writeln!(out, "{label} {} extracted (no reference list)", names.len());
            }

            if self.verbose > 0 && !names.is_empty() {
                let _ = writeln!(out, "    {}", names.join(", "));
            }
        }

        let invalid = report.invalid_total();
        let summary = format!(
            "Summary: {} names extracted, {invalid} invalid in {} validated categories",
            report.extracted.total(),
            report.statistics.len()
        );
        let summary_color = if invalid == 0 { ansi::GREEN } else { ansi::YELLOW };
        let _ = writeln!(out, "\n{}", self.colorize(&summary, summary_color));

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
