//! CorrelErrorCode trait for stable, machine-readable failure codes.

/// Every error enum implements this so the CLI can report a structured
/// code next to the human-readable message.
pub trait CorrelErrorCode {
    /// Returns the error code string (e.g., "INPUT_SHAPE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_SHAPE_ERROR: &str = "INPUT_SHAPE_ERROR";
pub const INPUT_NOT_FOUND: &str = "INPUT_NOT_FOUND";
pub const READ_ERROR: &str = "READ_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
