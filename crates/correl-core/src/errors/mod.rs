//! Error handling for correl.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod convert_error;
pub mod error_code;
pub mod read_error;
pub mod shape_error;
pub mod write_error;

pub use config_error::ConfigError;
pub use convert_error::ConvertError;
pub use error_code::CorrelErrorCode;
pub use read_error::ReadError;
pub use shape_error::InputShapeError;
pub use write_error::WriteError;
