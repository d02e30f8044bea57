use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{RefCheckError, Result};

use super::Config;
use super::model::CONFIG_VERSION;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, or defaults if none exists.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".abap-refcheck.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        // Reference lists exported from SAP are not always UTF-8.
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Validate config version and constraints the TOML schema can't express.
fn validate_config(config: &Config) -> Result<()> {
    match &config.version {
        None => {}
        Some(v) if v == CONFIG_VERSION => {}
        Some(v) => {
            return Err(RefCheckError::Config(format!(
                "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }
    }

    if config.checks.enabled.is_empty() {
        return Err(RefCheckError::Config(
            "checks.enabled must name at least one category".to_string(),
        ));
    }

    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| RefCheckError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content)
    }
}

/// Read a file that may legitimately be absent.
///
/// `Ok(None)` when no regular file sits at `path`: it does not exist, a parent
/// component is not a directory, or the path names a directory.
///
/// # Errors
/// Returns the underlying error for any other failure.
pub fn read_optional<F: FileSystem>(fs: &F, path: &Path) -> std::io::Result<Option<String>> {
    match fs.read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if is_absent(e.kind()) => Ok(None),
        Err(e) => Err(e),
    }
}

const fn is_absent(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::IsADirectory
    )
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
