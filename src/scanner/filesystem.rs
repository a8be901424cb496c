//! File system traversal utilities

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect files under `dir` whose names end with `suffix`.
///
/// Returns an empty list when the directory does not exist. The walk is
/// sorted by file name so the order is deterministic for a given tree.
pub fn find_files_with_suffix(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix))
        })
        .map(|entry| entry.into_path())
        .collect()
}
