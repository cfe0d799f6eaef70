use std::path::{Path, PathBuf};

/// Line count of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub path: PathBuf,
    pub lines: usize,
}

/// Per-file counts of one run together with their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSummary {
    files: Vec<FileCount>,
    total: usize,
}

impl CountSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            total: 0,
        }
    }

    /// Fold one file's count into the summary.
    pub fn record(&mut self, path: &Path, lines: usize) {
        self.total += lines;
        self.files.push(FileCount {
            path: path.to_path_buf(),
            lines,
        });
    }

    #[must_use]
    pub fn files(&self) -> &[FileCount] {
        &self.files
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
