use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{RefCheckError, Result};
use crate::output::{
    ErrorOutput, JsonFormatter, OutputFormatter, TextFormatter, print_error_full,
};
use crate::pipeline::analyze;
use crate::reference::ReferenceStore;
use crate::scanner::Scanner;
use crate::source::SourceText;
use crate::{EXIT_ERROR, EXIT_INVALID_FOUND, EXIT_SUCCESS};

/// Run the whole command and map the outcome to an exit code.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                suggestion_for(&e),
            );
            EXIT_ERROR
        }
    }
}

fn suggestion_for(err: &RefCheckError) -> Option<&'static str> {
    match err {
        RefCheckError::InputNotFound { .. } => Some("Check the SOURCE path"),
        RefCheckError::TomlParse(_) | RefCheckError::Config(_) => {
            Some("Fix .abap-refcheck.toml or run with --no-config")
        }
        _ => None,
    }
}

pub(crate) fn run_impl(cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(checks) = &cli.checks {
        config.checks.enabled.clone_from(checks);
    }

    // 2. Read source
    let text = SourceText::read(&cli.source)?;

    // 3. Load reference lists
    let store = ReferenceStore::new(&config.references);
    warn_missing_references(&store, &cli.reference_dir, &config);
    let references = store.load_all(&cli.reference_dir)?;

    // 4. Scan, extract, validate, assemble
    let scanner = Scanner::from_categories(&config.checks.enabled);
    let analysis = analyze(&text, &scanner, &references, cli.parallel);
    log_findings(cli.verbose, &cli.source, &text, &scanner, &analysis.findings);
    let report = analysis.report;

    // 5. Write report
    let json = JsonFormatter::new().format(&report)?;
    write_report(&cli.output, &json)?;
    if cli.verbose > 0 {
        eprintln!("Report written to {}", cli.output.display());
    }

    // 6. Summary
    if !cli.quiet {
        let summary = TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(&report)?;
        print!("{summary}");
    }

    if cli.fail_on_invalid && report.has_invalid() {
        Ok(EXIT_INVALID_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn log_findings(
    verbose: u8,
    source: &Path,
    text: &SourceText,
    scanner: &Scanner,
    findings: &[crate::check::Finding],
) {
    if verbose == 0 {
        return;
    }

    let checks: Vec<String> = scanner.categories().iter().map(ToString::to_string).collect();
    eprintln!(
        "Scanned {} ({} lines) with checks [{}]: {} findings",
        source.display(),
        text.line_count(),
        checks.join(", "),
        findings.len()
    );

    if verbose > 1 {
        for finding in findings {
            eprintln!("  {}:{finding}", source.display());
        }
    }
}

fn warn_missing_references(store: &ReferenceStore, dir: &Path, config: &Config) {
    let errors = ErrorOutput::stderr();
    for (category, file) in config.references.files() {
        if !store.has_file(dir, category) {
            errors.print_warning(&format!(
                "reference list {} not found; every {category} name counts as invalid",
                dir.join(file).display()
            ));
        }
    }
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| RefCheckError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
