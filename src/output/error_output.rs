//! Fatal error reporting on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::Write;

use super::ColorMode;
use super::ansi;
use crate::error::LineCountError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a full report for `err` on stderr.
    pub fn print_report(&self, err: &LineCountError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, err);
    }

    /// Writes the report for `err`: type and message, then cause and hint if any.
    pub fn write_report<W: Write>(&self, w: &mut W, err: &LineCountError) {
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }

    /// Writes an error block to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // A closed or redirected stderr leaves nowhere to report to, so write
        // failures are discarded.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Convenience function: reports `err` on stderr using `mode`.
pub fn print_error_report(err: &LineCountError, mode: ColorMode) {
    ErrorOutput::new(mode).print_report(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
