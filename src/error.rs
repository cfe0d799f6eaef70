use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineCountError {
    #[error("Missing argument: a root path to scan is required")]
    MissingArgument,

    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to traverse directory: {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("No files found for {config}")]
    NoFilesFound { config: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LineCountError {
    /// Short category name used as the heading of an error report.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MissingArgument => "Argument",
            Self::InvalidPath { .. } => "Path",
            Self::Traversal { .. } => "Traversal",
            Self::NoFilesFound { .. } => "NoFiles",
            Self::FileRead { .. } => "IO",
        }
    }

    /// The one-line message, without the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::MissingArgument | Self::NoFilesFound { .. } => None,
            Self::InvalidPath { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::Traversal { source, .. } => Some(source.to_string()),
        }
    }

    /// An actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingArgument => Some("Usage: linecount <ROOT> [SUFFIX]..."),
            Self::InvalidPath { source, .. } | Self::FileRead { source, .. } => {
                io_suggestion(source.kind())
            }
            Self::Traversal { source, .. } => {
                source.io_error().and_then(|e| io_suggestion(e.kind()))
            }
            Self::NoFilesFound { .. } => {
                Some("Suffixes are matched literally against the end of each path, e.g. '.rs'")
            }
        }
    }
}

const fn io_suggestion(kind: std::io::ErrorKind) -> Option<&'static str> {
    match kind {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, LineCountError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
