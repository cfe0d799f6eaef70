//! Diagnostic logging to stderr through the `log` facade.

use simplelog::{ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use crate::output::ColorMode;

/// Map the CLI verbosity flags to a level filter.
///
/// `quiet` wins over any number of `-v`.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a terminal logger on stderr. Does nothing if a logger is already set.
pub fn init(verbose: u8, quiet: bool, color: ColorMode) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let color_choice = if color.use_colors_on_stderr() {
        simplelog::ColorChoice::Always
    } else {
        simplelog::ColorChoice::Never
    };

    // Err only means another logger won the race.
    let _ = TermLogger::init(
        level_for(verbose, quiet),
        config,
        TerminalMode::Stderr,
        color_choice,
    );
}
