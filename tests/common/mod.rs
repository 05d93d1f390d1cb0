//! Common test utilities for synopsis integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use synopsis::Document;
use tempfile::TempDir;

/// A temporary input directory populated with text files
pub struct TestCorpus {
    temp_dir: TempDir,
    pub input_dir: PathBuf,
}

impl TestCorpus {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input_dir = temp_dir.path().join("texts");
        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");
        for (name, content) in files {
            std::fs::write(input_dir.join(name), content).expect("Failed to write text file");
        }
        Self {
            temp_dir,
            input_dir,
        }
    }

    /// A path next to the input directory, inside the same temp dir
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

pub fn documents(items: &[(&str, &str)]) -> Vec<Document> {
    items.iter().map(|&item| Document::from(item)).collect()
}

pub fn strip_gaps(row: &str, gap: char) -> String {
    row.chars().filter(|&c| c != gap).collect()
}
