use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use crate::check::Category;
use crate::config::{FileSystem, RealFileSystem, ReferencesConfig, read_optional};
use crate::error::{RefCheckError, Result};

/// Parse a newline-delimited name list: trimmed, uppercased, blank lines skipped.
#[must_use]
pub fn parse_reference_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Known-valid names per category, for the categories that have a reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    sets: IndexMap<Category, HashSet<String>>,
}

impl ReferenceSet {
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&HashSet<String>> {
        self.sets.get(&category)
    }

    /// Categories with a reference list, in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sets.keys().copied()
    }

    pub fn insert(&mut self, category: Category, names: HashSet<String>) {
        self.sets.insert(category, names);
        self.sets.sort_keys();
    }
}

/// Loads allow-lists from a reference directory.
#[derive(Debug, Clone)]
pub struct ReferenceStore<F: FileSystem = RealFileSystem> {
    fs: F,
    files: IndexMap<Category, String>,
}

impl ReferenceStore<RealFileSystem> {
    #[must_use]
    pub fn new(references: &ReferencesConfig) -> Self {
        Self::with_fs(RealFileSystem, references)
    }
}

impl<F: FileSystem> ReferenceStore<F> {
    #[must_use]
    pub fn with_fs(fs: F, references: &ReferencesConfig) -> Self {
        Self {
            fs,
            files: references.files(),
        }
    }

    /// Load the reference list for one category.
    ///
    /// A category with no configured file, or no regular file at the configured
    /// path (missing, a directory, or `dir` itself not a directory), yields an
    /// empty set.
    ///
    /// # Errors
    /// Returns `ReferenceRead` if the file exists but cannot be read.
    pub fn load(&self, dir: &Path, category: Category) -> Result<HashSet<String>> {
        let Some(file) = self.files.get(&category) else {
            return Ok(HashSet::new());
        };

        let path = dir.join(file);
        let content = read_optional(&self.fs, &path)
            .map_err(|source| RefCheckError::ReferenceRead { path, source })?;

        Ok(content.as_deref().map(parse_reference_list).unwrap_or_default())
    }

    /// Load every configured category.
    ///
    /// # Errors
    /// Returns the first `ReferenceRead` failure.
    pub fn load_all(&self, dir: &Path) -> Result<ReferenceSet> {
        let mut set = ReferenceSet::default();
        for &category in self.files.keys() {
            set.insert(category, self.load(dir, category)?);
        }
        Ok(set)
    }

    /// Whether a regular file backs the category; `load` returns an empty set otherwise.
    #[must_use]
    pub fn has_file(&self, dir: &Path, category: Category) -> bool {
        self.files
            .get(&category)
            .is_some_and(|file| self.fs.is_file(&dir.join(file)))
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
