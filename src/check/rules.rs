use regex::Regex;

use super::{Category, Check, Finding};
use crate::source::SourceText;

/// Identifier alphabet, including `/` for namespaced objects like `/ABC/CL_X`.
const IDENT: &str = "[A-Za-z0-9_/]+";

/// Compiled line patterns for one category.
///
/// The first participating capture group of each match is the name.
struct LinePatterns {
    category: Category,
    patterns: Vec<Regex>,
}

impl LinePatterns {
    fn new(category: Category, sources: &[String]) -> Self {
        let patterns = sources
            .iter()
            .map(|src| Regex::new(&format!("(?i){src}")).expect("Invalid regex"))
            .collect();
        Self { category, patterns }
    }

    fn findings<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a> {
        Box::new(
            text.lines()
                .flat_map(move |(line_number, line)| self.line_findings(line_number, line)),
        )
    }

    fn line_findings(&self, line_number: usize, line: &str) -> Vec<Finding> {
        let mut hits: Vec<(usize, &str)> = self
            .patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(line))
            .filter_map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .next()
                    .map(|m| (m.start(), m.as_str()))
            })
            .collect();

        // Stable sort keeps pattern order for hits starting at the same column.
        hits.sort_by_key(|(start, _)| *start);

        hits.into_iter()
            .map(|(_, name)| Finding::new(self.category, name, line_number))
            .collect()
    }
}

/// Class references: static access, instantiation and class definitions.
pub struct ClassCheck {
    patterns: LinePatterns,
}

impl Default for ClassCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(
                Category::Class,
                &[
                    format!("({IDENT})=>"),
                    format!(r"\bNEW\s+({IDENT})\s*\("),
                    format!(r"\bCREATE\s+OBJECT\s+\S+\s+TYPE\s+({IDENT})"),
                    format!(r"\bCLASS\s+({IDENT})\s+(?:DEFINITION|IMPLEMENTATION)\b"),
                ],
            ),
        }
    }
}

impl Check for ClassCheck {
    fn category(&self) -> Category {
        Category::Class
    }

    fn scan<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a> {
        self.patterns.findings(text)
    }
}

/// Function module calls (`CALL FUNCTION 'NAME'`).
pub struct FunctionCheck {
    patterns: LinePatterns,
}

impl Default for FunctionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(
                Category::Function,
                &[format!(r"\bCALL\s+FUNCTION\s+['`]?({IDENT})")],
            ),
        }
    }
}

impl Check for FunctionCheck {
    fn category(&self) -> Category {
        Category::Function
    }

    fn scan<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a> {
        self.patterns.findings(text)
    }
}

/// Subroutine definitions (`FORM name`). `PERFORM` and `ENDFORM` don't match.
pub struct FormCheck {
    patterns: LinePatterns,
}

impl Default for FormCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FormCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(Category::Form, &[format!(r"\bFORM\s+({IDENT})")]),
        }
    }
}

impl Check for FormCheck {
    fn category(&self) -> Category {
        Category::Form
    }

    fn scan<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a> {
        self.patterns.findings(text)
    }
}

/// Database tables read through `FROM` or `JOIN`.
pub struct TableCheck {
    patterns: LinePatterns,
}

impl Default for TableCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl TableCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(
                Category::Table,
                &[format!(r"\b(?:FROM|JOIN)\s+({IDENT})")],
            ),
        }
    }
}

impl Check for TableCheck {
    fn category(&self) -> Category {
        Category::Table
    }

    fn scan<'a>(&'a self, text: &'a SourceText) -> Box<dyn Iterator<Item = Finding> + 'a> {
        self.patterns.findings(text)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
