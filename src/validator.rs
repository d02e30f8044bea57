use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use serde::Serialize;

use crate::check::Category;
use crate::extractor::ExtractedSet;
use crate::reference::ReferenceSet;

/// Outcome of comparing one category's extracted names with its reference list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationStat {
    /// Distinct extracted names
    pub total: usize,
    #[serde(rename = "valid")]
    pub valid_count: usize,
    #[serde(rename = "invalid")]
    pub invalid_count: usize,
    /// `invalid / total * 100`, rounded half-to-even to two decimals; 0.0 when `total` is 0
    pub error_percentage: f64,
    /// Names absent from the reference list, sorted
    pub invalid_names: Vec<String>,
}

impl ValidationStat {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid_count == 0
    }
}

/// Compare extracted names against a reference set.
///
/// Neither input is modified; duplicate extracted names count once.
#[must_use]
pub fn validate<S: AsRef<str>>(extracted: &[S], reference: &HashSet<String>) -> ValidationStat {
    let distinct: BTreeSet<&str> = extracted.iter().map(AsRef::as_ref).collect();

    let invalid_names: Vec<String> = distinct
        .iter()
        .filter(|name| !reference.contains(**name))
        .map(|name| (*name).to_string())
        .collect();

    let total = distinct.len();
    let invalid_count = invalid_names.len();

    ValidationStat {
        total,
        valid_count: total - invalid_count,
        invalid_count,
        error_percentage: error_percentage(invalid_count, total),
        invalid_names,
    }
}

/// Validate every category that has a reference list, in canonical order.
#[must_use]
pub fn validate_all(
    extracted: &ExtractedSet,
    references: &ReferenceSet,
) -> IndexMap<Category, ValidationStat> {
    references
        .categories()
        .filter_map(|category| {
            references
                .get(category)
                .map(|known| (category, validate(extracted.names(category), known)))
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)] // name counts are far below 2^52
fn error_percentage(invalid: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = invalid as f64 / total as f64 * 100.0;
    round_to_hundredths(percent)
}

/// Round to two decimals from the exact binary value, exact ties going to the
/// even digit (3.125 becomes 3.12, not 3.13).
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
