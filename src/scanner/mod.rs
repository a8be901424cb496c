//! Scanner module - Project tree access for the checks
//!
//! The scanner is the only component that touches the file system. Reads are
//! deliberately fail-soft: an unreadable file degrades to empty content so a
//! single bad file never aborts a run.

mod filesystem;

use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only handle on the project tree being analyzed.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new scanner for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All Dart source files under `lib/`, recursively. Empty when the
    /// directory is missing.
    pub fn dart_files(&self) -> Vec<PathBuf> {
        self.files_with_suffix("lib", ".dart")
    }

    /// Files under `subdir` (relative to the root) whose names end with
    /// `suffix`, recursively. Empty when the directory is missing.
    pub fn files_with_suffix(&self, subdir: &str, suffix: &str) -> Vec<PathBuf> {
        filesystem::find_files_with_suffix(&self.root.join(subdir), suffix)
    }

    /// Check if a file exists relative to the root.
    pub fn file_exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Check if a directory exists relative to the root.
    pub fn directory_exists(&self, path: &str) -> bool {
        let full_path = self.root.join(path);
        full_path.exists() && full_path.is_dir()
    }

    /// Read a file's content, degrading to an empty string on any error.
    pub fn read_file(&self, path: &Path) -> String {
        match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Unreadable file treated as empty");
                String::new()
            }
        }
    }

    /// Display form of a path, relative to the project root.
    pub fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dart_files_under_lib() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("lib/services")).unwrap();
        fs::write(root.join("lib/main.dart"), "void main() {}").unwrap();
        fs::write(root.join("lib/services/api.dart"), "class Api {}").unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();

        let scanner = Scanner::new(root.to_path_buf());
        let mut files = scanner.dart_files();
        files.sort();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_dart_files_without_lib_directory() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = Scanner::new(temp_dir.path().to_path_buf());
        assert!(scanner.dart_files().is_empty());
    }

    #[test]
    fn test_existence_checks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("lib/models")).unwrap();
        fs::write(root.join("pubspec.yaml"), "name: app").unwrap();

        let scanner = Scanner::new(root.to_path_buf());
        assert!(scanner.file_exists("pubspec.yaml"));
        assert!(scanner.directory_exists("lib/models"));
        assert!(!scanner.directory_exists("lib/screens"));
        // A file is not a directory
        assert!(!scanner.directory_exists("pubspec.yaml"));
    }

    #[test]
    fn test_read_file_fail_soft() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = Scanner::new(temp_dir.path().to_path_buf());

        let content = scanner.read_file(&temp_dir.path().join("missing.dart"));
        assert_eq!(content, "");
    }

    #[test]
    fn test_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let scanner = Scanner::new(root.to_path_buf());

        let rel = scanner.relative_path(&root.join("lib").join("main.dart"));
        assert_eq!(rel, format!("lib{}main.dart", std::path::MAIN_SEPARATOR));
    }
}
