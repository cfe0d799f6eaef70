use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, FileScanner};
use crate::error::{LineCountError, Result};

/// Recursive walker yielding every regular file accepted by its filter.
///
/// Entries are visited in file-name order within each directory. A symlink is
/// yielded when its target is a regular file, but symlinked directories are
/// never descended into. The first unreadable entry aborts the whole scan.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| LineCountError::Traversal {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;
            log::trace!("visiting {}", entry.path().display());

            if is_file_entry(&entry) && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Regular files, plus symlinks resolving to one. Dangling links are skipped.
fn is_file_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
