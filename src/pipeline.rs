use crate::check::Finding;
use crate::extractor::extract;
use crate::reference::ReferenceSet;
use crate::report::{Report, assemble};
use crate::scanner::Scanner;
use crate::source::SourceText;
use crate::validator::validate_all;

/// Findings of one scan together with the report built from them.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub findings: Vec<Finding>,
    pub report: Report,
}

/// Scan, extract, validate and assemble in one pass.
///
/// `parallel` runs the checks on the rayon pool; the result is identical.
#[must_use]
pub fn analyze(
    text: &SourceText,
    scanner: &Scanner,
    references: &ReferenceSet,
    parallel: bool,
) -> Analysis {
    let findings = if parallel {
        scanner.scan_parallel(text)
    } else {
        scanner.scan(text)
    };
    let report = report_from_findings(findings.iter().cloned(), references);
    Analysis { findings, report }
}

/// Build a report from findings that were already collected.
#[must_use]
pub fn report_from_findings<I>(findings: I, references: &ReferenceSet) -> Report
where
    I: IntoIterator<Item = Finding>,
{
    let extracted = extract(findings);
    let stats = validate_all(&extracted, references);
    assemble(extracted, stats)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::check::Category;

    const DEMO: &str = "\
CLASS cl_demo DEFINITION.
FORM process_data.
CALL FUNCTION 'Z_GET_DATA'.
SELECT * FROM ztab1.
";

    fn names(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn demo_references() -> ReferenceSet {
        let mut references = ReferenceSet::default();
        references.insert(Category::Class, names(&["CL_DEMO"]));
        references.insert(Category::Function, names(&["Z_GET_DATA"]));
        references.insert(Category::Table, HashSet::new());
        references
    }

    #[test]
    fn end_to_end_demo() {
        let report = analyze(
            &SourceText::from(DEMO),
            &Scanner::default(),
            &demo_references(),
            false,
        )
        .report;

        assert_eq!(report.extracted.names(Category::Class), ["CL_DEMO"]);
        assert_eq!(report.extracted.names(Category::Function), ["Z_GET_DATA"]);
        assert_eq!(report.extracted.names(Category::Form), ["PROCESS_DATA"]);
        assert_eq!(report.extracted.names(Category::Table), ["ZTAB1"]);

        let classes = &report.statistics[&Category::Class];
        assert_eq!((classes.total, classes.valid_count, classes.invalid_count), (1, 1, 0));
        assert!(classes.error_percentage.abs() < f64::EPSILON);

        let functions = &report.statistics[&Category::Function];
        assert_eq!((functions.total, functions.valid_count), (1, 1));
        assert!(functions.invalid_names.is_empty());

        let tables = &report.statistics[&Category::Table];
        assert_eq!((tables.total, tables.valid_count, tables.invalid_count), (1, 0, 1));
        assert!((tables.error_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(tables.invalid_names, vec!["ZTAB1"]);

        assert!(!report.statistics.contains_key(&Category::Form));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let text = SourceText::from(DEMO);
        let scanner = Scanner::default();
        let references = demo_references();

        let first = analyze(&text, &scanner, &references, false);
        let second = analyze(&text, &scanner, &references, false);
        assert_eq!(
            serde_json::to_string(&first.report).unwrap(),
            serde_json::to_string(&second.report).unwrap()
        );
    }

    #[test]
    fn parallel_analysis_matches_sequential() {
        let text = SourceText::from(DEMO);
        let scanner = Scanner::default();
        let references = demo_references();

        let sequential = analyze(&text, &scanner, &references, false);
        let parallel = analyze(&text, &scanner, &references, true);

        assert_eq!(sequential.findings, parallel.findings);
        assert_eq!(sequential.report, parallel.report);
    }

    #[test]
    fn analysis_keeps_findings_in_scan_order() {
        let analysis = analyze(
            &SourceText::from(DEMO),
            &Scanner::default(),
            &demo_references(),
            false,
        );
        let lines: Vec<String> = analysis.findings.iter().map(ToString::to_string).collect();

        assert_eq!(analysis.findings.len(), 4);
        assert!(lines.contains(&"4:tables ZTAB1".to_string()));
    }

    #[test]
    fn unregistered_check_leaves_category_empty() {
        let scanner = Scanner::from_categories(&[Category::Class, Category::Table]);
        let report = analyze(&SourceText::from(DEMO), &scanner, &demo_references(), false).report;

        assert!(report.extracted.names(Category::Form).is_empty());
        assert!(report.extracted.names(Category::Function).is_empty());
        assert_eq!(report.statistics[&Category::Function].total, 0);
    }
}
