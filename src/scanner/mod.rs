use std::fmt;

use rayon::prelude::*;

use crate::check::{Category, Check, Finding, default_check};
use crate::source::SourceText;

/// Runs a configured set of checks over source text.
///
/// Findings are concatenated in check registration order, then in each
/// check's own order. Nothing is dropped or deduplicated here.
pub struct Scanner {
    checks: Vec<Box<dyn Check>>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::from_categories(&Category::ALL)
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("checks", &self.categories())
            .finish()
    }
}

impl Scanner {
    /// Create a scanner with no checks registered.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register the built-in check for each category, once per category.
    #[must_use]
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut scanner = Self::new();
        for &category in categories {
            if !scanner.categories().contains(&category) {
                scanner.register(default_check(category));
            }
        }
        scanner
    }

    #[must_use]
    pub fn with_check(mut self, check: Box<dyn Check>) -> Self {
        self.register(check);
        self
    }

    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Categories of the registered checks, in registration order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.checks.iter().map(|c| c.category()).collect()
    }

    #[must_use]
    pub fn scan(&self, text: &SourceText) -> Vec<Finding> {
        self.checks.iter().flat_map(|check| check.scan(text)).collect()
    }

    /// Same result as [`Scanner::scan`], with checks running on the rayon pool.
    #[must_use]
    pub fn scan_parallel(&self, text: &SourceText) -> Vec<Finding> {
        let per_check: Vec<Vec<Finding>> = self
            .checks
            .par_iter()
            .map(|check| check.scan(text).collect())
            .collect();

        per_check.into_iter().flatten().collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
