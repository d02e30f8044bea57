#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the abap-refcheck binary.
#[macro_export]
macro_rules! abap_refcheck {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("abap-refcheck"))
    };
}

/// Temporary directory holding a source file, a reference directory and the report.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty `base/` reference directory.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir_all(fixture.base_dir()).expect("Failed to create base directory");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `base/<name>` with one reference name per line.
    pub fn create_reference(&self, name: &str, entries: &[&str]) {
        let mut content = entries.join("\n");
        content.push('\n');
        self.create_file(&format!("base/{name}"), &content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn base_dir(&self) -> PathBuf {
        self.dir.path().join("base")
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("report.json")
    }

    /// Parses the written report.
    pub fn read_report(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.report_path()).expect("Report should exist");
        serde_json::from_str(&content).expect("Report should be valid JSON")
    }
}
