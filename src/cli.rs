use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linecount")]
#[command(author, version, about = "Recursively count text lines in files")]
#[command(long_about = "Recursively count text lines in every file under ROOT.\n\n\
    When SUFFIX values are given, only files whose path ends with one of them\n\
    (a literal, case-sensitive match) are counted.\n\n\
    Exit codes:\n  \
    0 - Total printed\n  \
    1 - Invalid path, unreadable file or directory, or no matching files")]
pub struct Cli {
    /// File or directory to scan
    pub root: Option<PathBuf>,

    /// Literal path suffixes selecting files to count (e.g. .rs .toml)
    pub suffixes: Vec<String>,

    /// Print each counted file with its line count before the total
    #[arg(long)]
    pub per_file: bool,

    /// Increase log verbosity (-v info, -vv per-file debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
