//! Run configuration: the root to scan and the suffixes that select files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LineCountError, Result};

/// Resolved, immutable settings for a single counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    root: PathBuf,
    suffixes: Vec<String>,
}

impl Config {
    /// Validate the root path and capture the suffix filters.
    ///
    /// An empty `suffixes` list means every file is counted.
    ///
    /// # Errors
    /// Returns [`LineCountError::MissingArgument`] when no root is given, or
    /// [`LineCountError::InvalidPath`] when the root cannot be stat'ed.
    pub fn resolve(root: Option<PathBuf>, suffixes: Vec<String>) -> Result<Self> {
        let root = root.ok_or(LineCountError::MissingArgument)?;

        fs::metadata(&root).map_err(|source| LineCountError::InvalidPath {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root, suffixes })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path: {} file types: {}",
            self.root.display(),
            self.suffixes.join(", ")
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
