use std::collections::HashSet;

use super::*;
use crate::check::{Category, Finding};
use crate::extractor::extract;
use crate::report::assemble;
use crate::validator::validate;

fn make_report() -> Report {
    let extracted = extract(vec![
        Finding::new(Category::Function, "z_get_data", 3),
        Finding::new(Category::Table, "ztab1", 4),
    ]);
    let known: HashSet<String> = ["Z_GET_DATA".to_string()].into_iter().collect();
    let functions = validate(extracted.names(Category::Function), &known);
    let tables = validate(extracted.names(Category::Table), &HashSet::new());
    assemble(
        extracted,
        vec![(Category::Function, functions), (Category::Table, tables)],
    )
}

#[test]
fn json_output_is_valid() {
    let output = JsonFormatter::new().format(&make_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(parsed.get("extracted").is_some());
    assert!(parsed.get("statistics").is_some());
    assert_eq!(parsed.as_object().unwrap().len(), 2);
}

#[test]
fn json_is_pretty_printed_in_canonical_order() {
    let output = JsonFormatter::new().format(&make_report()).unwrap();

    let classes = output.find("\"classes\"").unwrap();
    let functions = output.find("\"functions\"").unwrap();
    let forms = output.find("\"forms\"").unwrap();
    let tables = output.find("\"tables\"").unwrap();
    assert!(classes < functions && functions < forms && forms < tables);
    assert!(output.contains("\n  \"extracted\": {"));
}

#[test]
fn json_statistics_fields() {
    let output = JsonFormatter::new().format(&make_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let tables = &parsed["statistics"]["tables"];

    assert_eq!(tables["total"], 1);
    assert_eq!(tables["valid"], 0);
    assert_eq!(tables["invalid"], 1);
    assert_eq!(tables["error_percentage"], 100.0);
    assert_eq!(tables["invalid_names"], serde_json::json!(["ZTAB1"]));
    assert_eq!(parsed["statistics"]["functions"]["error_percentage"], 0.0);
    assert!(parsed["statistics"].get("forms").is_none());
}

#[test]
fn json_output_is_deterministic() {
    let first = JsonFormatter::new().format(&make_report()).unwrap();
    let second = JsonFormatter::new().format(&make_report()).unwrap();
    assert_eq!(first, second);
}
