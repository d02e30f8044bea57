use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::check::Category;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "abap-refcheck")]
#[command(
    author,
    version,
    about = "Extract object references from ABAP source and validate them against reference lists"
)]
#[command(long_about = "Scans one ABAP source file for class, function module, FORM and \
    table references, compares them with the reference lists in REFERENCE_DIR \
    (classes.txt, functions.txt, tables.txt) and writes a JSON report.\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    1 - Invalid names found (with --fail-on-invalid)\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// ABAP source file to scan
    pub source: PathBuf,

    /// Directory with one reference list per category
    pub reference_dir: PathBuf,

    /// Path of the JSON report to write
    pub output: PathBuf,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Checks to run (comma-separated: classes,functions,forms,tables; overrides config)
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<Category>>,

    /// Run checks in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Exit with code 1 when any extracted name is missing from its reference list
    #[arg(long)]
    pub fail_on_invalid: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
