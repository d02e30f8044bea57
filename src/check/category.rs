use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of object reference a check targets.
///
/// Declaration order is the canonical order used for every report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "classes")]
    Class,
    #[serde(rename = "functions")]
    Function,
    #[serde(rename = "forms")]
    Form,
    #[serde(rename = "tables")]
    Table,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Class, Self::Function, Self::Form, Self::Table];

    /// Key used in reports and configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Function => "functions",
            Self::Form => "forms",
            Self::Table => "tables",
        }
    }

    /// Reference list file name used when the config does not name one.
    #[must_use]
    pub const fn default_reference_file(self) -> Option<&'static str> {
        match self {
            Self::Class => Some("classes.txt"),
            Self::Function => Some("functions.txt"),
            Self::Table => Some("tables.txt"),
            Self::Form => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "class" | "classes" => Ok(Self::Class),
            "function" | "functions" => Ok(Self::Function),
            "form" | "forms" => Ok(Self::Form),
            "table" | "tables" => Ok(Self::Table),
            _ => Err(format!(
                "Unknown category: {s} (expected classes, functions, forms or tables)"
            )),
        }
    }
}
