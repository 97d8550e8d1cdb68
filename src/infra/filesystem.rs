//! Filesystem operations
//!
//! Read-only helpers. Existence checks never fail, and reads used by the
//! manifest layer degrade to `None` instead of propagating errors.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Join a sequence of path segments onto a base path
pub fn join_segments(base: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(base.to_path_buf(), |acc, s| acc.join(s))
}

/// Read content from a file, decoding invalid UTF-8 lossily
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|e| FilesystemError::ReadFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}

/// Read content from a file, treating any failure as absence
pub fn read_optional(path: &Path) -> Option<String> {
    match read_file(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!("{e}");
            None
        }
    }
}

/// Find the first file named `file_name` anywhere under `root`
///
/// Traversal is sorted by file name so repeated calls pick the same match.
pub fn find_file_named(root: &Path, file_name: &str) -> Option<PathBuf> {
    if !root.is_dir() {
        return None;
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .map(walkdir::DirEntry::into_path)
}

/// List every file under `root` whose extension is `extension`, sorted
pub fn files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect()
}

/// List the immediate subdirectories of `dir`, sorted by name
pub fn list_subdirs(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
