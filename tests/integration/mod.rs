// Integration test utilities shared across test binaries
#![allow(dead_code)]


use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding sentence files for a test
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a sentence file (one sentence per line) and return its path
    pub fn create_sentence_file<P: AsRef<Path>>(&self, relative_path: P, sentences: &[&str]) -> PathBuf {
        let mut content = sentences.join("\n");
        content.push('\n');
        self.create_raw_file(relative_path, content.as_bytes())
    }

    /// Write arbitrary bytes, including invalid UTF-8
    pub fn create_raw_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}
