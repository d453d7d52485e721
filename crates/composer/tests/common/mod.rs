// Test infrastructure and utilities for composer tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Content directory used by the default ebook pattern
pub const CONTENT_DIR: &str = "ebook/en/content";

/// Docs tree builder backed by a temporary directory
pub struct TestDocs {
    pub root: TempDir,
}

impl TestDocs {
    /// Create an empty docs tree with the content directory in place
    pub fn new() -> std::io::Result<Self> {
        let root = TempDir::new()?;
        fs::create_dir_all(root.path().join(CONTENT_DIR))?;
        Ok(Self { root })
    }

    /// Docs tree holding the given content files
    pub fn with_files(names: &[&str]) -> std::io::Result<Self> {
        let docs = Self::new()?;
        for name in names {
            docs.add_content(name)?;
        }
        Ok(docs)
    }

    /// Get the root path
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Add a markdown file to the content directory
    pub fn add_content(&self, name: &str) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(CONTENT_DIR).join(name);
        fs::write(&path, format!("# {}\n\nSample content.\n", name))?;
        Ok(path)
    }

    /// Write a configuration file at the docs root
    pub fn write_config(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Read a generated artifact
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.path().join(name)).unwrap_or_default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.root.path().join(name).exists()
    }
}

/// The two-command ebook used across tests
pub fn sample_docs() -> TestDocs {
    TestDocs::with_files(&[
        "000-introduction.md",
        "001-the-setup-command.md",
        "002-install-command.md",
        "notes.md",
    ])
    .expect("create sample docs")
}
