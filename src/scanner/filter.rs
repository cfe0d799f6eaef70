use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects files whose path ends with one of a set of literal suffixes.
///
/// Matching is a plain, case-sensitive comparison of trailing characters
/// against the whole path, so `.txt` matches `notes.txt` while `txt` also
/// matches `footxt`. No suffixes at all means every path is accepted.
#[derive(Debug, Clone, Default)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    #[must_use]
    pub const fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }

        let path = path.to_string_lossy();
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
