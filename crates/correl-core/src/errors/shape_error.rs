//! Structural problems in the input table.

use super::error_code::{self, CorrelErrorCode};

/// The table does not have the shape the reducer needs.
///
/// `row` is the 0-based data-row index (the header is not counted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputShapeError {
    #[error("Input table has no header row")]
    MissingHeader,

    #[error("Data row {row} has no cells (missing node name)")]
    EmptyRow { row: usize },

    #[error(
        "Data row {row} ({node}) has a numeric cell at position {position}, \
         beyond the {header_width} header node(s)"
    )]
    RaggedRow {
        row: usize,
        node: String,
        position: usize,
        header_width: usize,
    },
}

impl CorrelErrorCode for InputShapeError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_SHAPE_ERROR
    }
}
