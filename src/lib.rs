pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

pub use config::Config;
pub use error::{LineCountError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
