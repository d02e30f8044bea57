use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source file not found or unreadable: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read reference list: {path}")]
    ReferenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RefCheckError {
    /// Short label used as the heading of error messages on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::InputNotFound { .. } => "Input",
            Self::ReferenceRead { .. } => "Reference",
            Self::OutputWrite { .. } | Self::JsonSerialize(_) => "Output",
            Self::Io(_) => "IO",
        }
    }

    /// Headline message; for path errors this is the path itself.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InputNotFound { path, .. }
            | Self::ReferenceRead { path, .. }
            | Self::ConfigRead { path, .. }
            | Self::OutputWrite { path, .. } => path.display().to_string(),
            Self::Config(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// The I/O cause behind a path error.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InputNotFound { source, .. }
            | Self::ReferenceRead { source, .. }
            | Self::ConfigRead { source, .. }
            | Self::OutputWrite { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RefCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
