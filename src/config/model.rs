use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::check::Category;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of `.abap-refcheck.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Optional; only "1" is accepted.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub references: ReferencesConfig,
}

/// Which checks the scanner registers [checks].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecksConfig {
    /// Categories to scan for, in registration order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<Category>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// Reference list file per category, relative to the reference directory [references].
///
/// An empty string disables statistics for that category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferencesConfig {
    #[serde(default = "default_classes_file")]
    pub classes: String,

    #[serde(default = "default_functions_file")]
    pub functions: String,

    #[serde(default)]
    pub forms: String,

    #[serde(default = "default_tables_file")]
    pub tables: String,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            classes: default_classes_file(),
            functions: default_functions_file(),
            forms: String::new(),
            tables: default_tables_file(),
        }
    }
}

impl ReferencesConfig {
    /// Configured file for a category, if any.
    #[must_use]
    pub fn file_for(&self, category: Category) -> Option<&str> {
        let file = match category {
            Category::Class => &self.classes,
            Category::Function => &self.functions,
            Category::Form => &self.forms,
            Category::Table => &self.tables,
        };
        let file = file.trim();
        (!file.is_empty()).then_some(file)
    }

    /// Category → file for every category with a reference list, in canonical order.
    #[must_use]
    pub fn files(&self) -> IndexMap<Category, String> {
        Category::ALL
            .iter()
            .filter_map(|&c| self.file_for(c).map(|f| (c, f.to_string())))
            .collect()
    }
}

fn default_enabled() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_file(category: Category) -> String {
    category
        .default_reference_file()
        .unwrap_or_default()
        .to_string()
}

fn default_classes_file() -> String {
    default_file(Category::Class)
}

fn default_functions_file() -> String {
    default_file(Category::Function)
}

fn default_tables_file() -> String {
    default_file(Category::Table)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
