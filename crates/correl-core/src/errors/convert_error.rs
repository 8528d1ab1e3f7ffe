//! Top-level conversion error.

use super::error_code::CorrelErrorCode;
use super::{ConfigError, InputShapeError, ReadError, WriteError};

/// Errors that abort a conversion run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Input shape error: {0}")]
    Shape(#[from] InputShapeError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CorrelErrorCode for ConvertError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read(e) => e.error_code(),
            Self::Shape(e) => e.error_code(),
            Self::Write(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
