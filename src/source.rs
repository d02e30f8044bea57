use std::path::Path;

use crate::error::{RefCheckError, Result};

/// Content of one ABAP source file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// legacy sources are frequently stored in a single-byte code page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    content: String,
}

impl SourceText {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Read a source file from disk.
    ///
    /// # Errors
    /// Returns `InputNotFound` if the file does not exist or cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| RefCheckError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(String::from_utf8_lossy(&bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Lines paired with their 1-based line number.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content.lines().enumerate().map(|(i, line)| (i + 1, line))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

impl From<&str> for SourceText {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}
