use crate::cli::Cli;
use crate::config::Config;
use crate::counter::{CountSummary, LineCounter};
use crate::error::{LineCountError, Result};
use crate::output::{ColorMode, SummaryFormatter, print_error_report};
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

/// Count every line of every file selected by `config`.
///
/// Files are counted in walk order and the first failure aborts the run.
///
/// # Errors
/// Returns [`LineCountError::Traversal`] if the walk fails,
/// [`LineCountError::NoFilesFound`] if nothing matches the suffixes, or
/// [`LineCountError::FileRead`] if any selected file cannot be read.
pub fn count_lines(config: &Config) -> Result<CountSummary> {
    let scanner = DirectoryScanner::new(SuffixFilter::new(config.suffixes().to_vec()));
    let files = scanner.scan(config.root())?;

    if files.is_empty() {
        return Err(LineCountError::NoFilesFound {
            config: config.to_string(),
        });
    }
    log::info!("counting {} file(s)", files.len());

    let counter = LineCounter::new();
    let mut summary = CountSummary::new();
    for path in &files {
        let lines = counter.count_file(path)?;
        log::debug!("{lines}\t{}", path.display());
        summary.record(path, lines);
    }

    Ok(summary)
}

/// Resolve the configuration from `cli`, count, and render the output text.
///
/// # Errors
/// Any error from [`Config::resolve`] or [`count_lines`].
pub fn run_count_impl(cli: &Cli) -> Result<String> {
    let config = Config::resolve(cli.root.clone(), cli.suffixes.clone())?;
    log::info!("{config}");

    let summary = count_lines(&config)?;
    Ok(SummaryFormatter::new(cli.per_file).format(&summary))
}

#[must_use]
pub fn run_count(cli: &Cli) -> i32 {
    match run_count_impl(cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_report(&e, ColorMode::from(cli.color));
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
