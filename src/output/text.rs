use std::fmt::Write;

use crate::counter::CountSummary;

/// Renders the result of a run as plain text for stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter {
    per_file: bool,
}

impl SummaryFormatter {
    #[must_use]
    pub const fn new(per_file: bool) -> Self {
        Self { per_file }
    }

    /// One `<lines>\t<path>` row per file when enabled, then `<total> lines`.
    #[must_use]
    pub fn format(&self, summary: &CountSummary) -> String {
        let mut output = String::new();

        if self.per_file {
            for file in summary.files() {
                let _ = writeln!(output, "{}\t{}", file.lines, file.path.display());
            }
        }

        let _ = writeln!(output, "{} lines", summary.total());
        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
