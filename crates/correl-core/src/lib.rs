//! # correl-core
//!
//! Converts a correlation matrix held in a CSV table into a JSON document
//! that keeps only the upper triangle (no diagonal, no mirrored pairs).
//!
//! Pipeline: [`table::Table`] -> [`reduce::reduce`] -> [`document::Document`],
//! chained by [`convert::convert`].

pub mod config;
pub mod constants;
pub mod convert;
pub mod document;
pub mod errors;
pub mod reduce;
pub mod table;
pub mod tracing;

pub use config::{CliOverrides, CorrelConfig};
pub use convert::{convert, convert_paths, load_and_convert, ConversionSummary};
pub use document::{Correlations, Document, OrderedMap};
pub use errors::{ConvertError, CorrelErrorCode, InputShapeError};
pub use reduce::{reduce, reduce_with_stats, ReduceStats};
pub use table::Table;
