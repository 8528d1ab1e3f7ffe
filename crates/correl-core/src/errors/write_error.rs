//! Output document write errors.

use std::path::PathBuf;

use super::error_code::{self, CorrelErrorCode};

/// Errors that can occur while serializing or writing the output document.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {message}")]
    Serialize { message: String },
}

impl CorrelErrorCode for WriteError {
    fn error_code(&self) -> &'static str {
        error_code::WRITE_ERROR
    }
}
