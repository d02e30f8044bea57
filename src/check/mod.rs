mod category;
mod rules;

pub use category::Category;
pub use rules::{ClassCheck, FormCheck, FunctionCheck, TableCheck};

use std::fmt;

use crate::source::SourceText;

/// A single located match produced by one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub category: Category,
    /// Matched identifier, uppercased
    pub name: String,
    /// Line of the match (1-indexed)
    pub line_number: usize,
}

impl Finding {
    #[must_use]
    pub fn new(category: Category, name: &str, line_number: usize) -> Self {
        Self {
            category,
            name: name.to_uppercase(),
            line_number,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line_number, self.category, self.name)
    }
}

/// Trait for category-specific reference detection.
///
/// Implementations must be read-only over the text so that several checks
/// can scan the same source concurrently.
pub trait Check: Send + Sync {
    /// Category of every finding this check emits.
    fn category(&self) -> Category;

    /// Lazily yield findings in line order, then column order within a line.
    fn scan<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a>;
}

/// Get the built-in check for a category.
#[must_use]
pub fn default_check(category: Category) -> Box<dyn Check> {
    match category {
        Category::Class => Box::new(ClassCheck::new()),
        Category::Function => Box::new(FunctionCheck::new()),
        Category::Form => Box::new(FormCheck::new()),
        Category::Table => Box::new(TableCheck::new()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
