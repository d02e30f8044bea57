use indexmap::IndexMap;
use serde::Serialize;

use crate::check::Category;
use crate::extractor::ExtractedSet;
use crate::validator::ValidationStat;

/// Extracted names plus per-category statistics for one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub extracted: ExtractedSet,
    pub statistics: IndexMap<Category, ValidationStat>,
}

impl Report {
    /// Whether any validated category has names missing from its reference list.
    #[must_use]
    pub fn has_invalid(&self) -> bool {
        self.statistics.values().any(|s| !s.is_clean())
    }

    #[must_use]
    pub fn invalid_total(&self) -> usize {
        self.statistics.values().map(|s| s.invalid_count).sum()
    }
}

/// Assemble a report, ordering statistics by canonical category order.
#[must_use]
pub fn assemble(
    extracted: ExtractedSet,
    stats: impl IntoIterator<Item = (Category, ValidationStat)>,
) -> Report {
    let mut statistics: IndexMap<Category, ValidationStat> = stats.into_iter().collect();
    statistics.sort_keys();

    Report {
        extracted,
        statistics,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
