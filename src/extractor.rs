use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::check::{Category, Finding};

/// Category → sorted, duplicate-free, uppercase names.
///
/// Every category is present, in canonical order, even when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedSet {
    names: IndexMap<Category, Vec<String>>,
}

impl Default for ExtractedSet {
    fn default() -> Self {
        extract(std::iter::empty())
    }
}

impl ExtractedSet {
    #[must_use]
    pub fn names(&self, category: Category) -> &[String] {
        self.names.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.names.iter().map(|(c, names)| (*c, names.as_slice()))
    }

    /// Number of distinct names across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.names.values().map(Vec::len).sum()
    }
}

/// Group findings by category, dropping duplicates regardless of line number.
pub fn extract<I>(findings: I) -> ExtractedSet
where
    I: IntoIterator<Item = Finding>,
{
    let mut grouped: IndexMap<Category, BTreeSet<String>> = Category::ALL
        .iter()
        .map(|&c| (c, BTreeSet::new()))
        .collect();

    for finding in findings {
        grouped
            .entry(finding.category)
            .or_default()
            .insert(finding.name.to_uppercase());
    }

    ExtractedSet {
        names: grouped
            .into_iter()
            .map(|(c, set)| (c, set.into_iter().collect()))
            .collect(),
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
