//! Input table read errors.

use std::path::PathBuf;

use super::error_code::{self, CorrelErrorCode};

/// Errors that can occur while loading the input table.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

impl ReadError {
    /// Classify a `csv::Error` raised while reading `path`.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io { path, source },
            _ => Self::Csv { path, message },
        }
    }
}

impl CorrelErrorCode for ReadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                error_code::INPUT_NOT_FOUND
            }
            _ => error_code::READ_ERROR,
        }
    }
}
