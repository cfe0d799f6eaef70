use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LineCountError, Result};

const NEWLINE: u8 = b'\n';

/// Counts newline-delimited lines.
///
/// A trailing chunk without a terminator still counts as a line, an empty
/// input counts as zero. Content is handled as raw bytes, so files that are
/// not valid UTF-8 are counted rather than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCounter;

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Count lines from a buffered reader.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<usize> {
        let mut count = 0;
        for line in reader.split(NEWLINE) {
            line?;
            count += 1;
        }
        Ok(count)
    }

    /// Open `path` and count its lines. The handle is closed before returning.
    ///
    /// # Errors
    /// Returns [`LineCountError::FileRead`] if the file cannot be opened or read.
    pub fn count_file(&self, path: &Path) -> Result<usize> {
        let to_error = |source| LineCountError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        self.count_reader(BufReader::new(file)).map_err(to_error)
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
