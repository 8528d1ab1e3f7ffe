//! Matrix reduction: headered table to sparse upper-triangle document.
//!
//! Row `data_row_index` counts data rows only (header excluded) and
//! `cell_position_index` counts cells after the row-name column. A value is
//! kept only when `cell_position_index > data_row_index`, so the diagonal and
//! everything below it are dropped even when they hold numbers.

use crate::document::{Correlations, Document, OrderedMap};
use crate::errors::InputShapeError;
use crate::table::Table;

/// Counters gathered during one reduction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// Data rows seen (header excluded).
    pub data_rows: usize,
    /// Entries present in the final document.
    pub entries: usize,
    /// Non-blank cells that did not parse as a finite number.
    pub skipped_non_numeric: usize,
    /// Numeric cells on or below the diagonal.
    pub discarded_lower: usize,
}

/// A non-blank cell that is not a usable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotNumeric;

/// Parse a cell as a finite float, tolerating surrounding whitespace.
/// `nan` and `inf` have no JSON number form and count as non-numeric.
fn parse_value(cell: &str) -> Result<f64, NotNumeric> {
    let value: f64 = cell.trim().parse().map_err(|_| NotNumeric)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NotNumeric)
    }
}

/// Reduce `table` to its document form.
pub fn reduce(table: &Table) -> Result<Document, InputShapeError> {
    reduce_with_stats(table).map(|(document, _)| document)
}

/// Reduce `table` and report what was kept and dropped.
pub fn reduce_with_stats(table: &Table) -> Result<(Document, ReduceStats), InputShapeError> {
    let header = table.header().ok_or(InputShapeError::MissingHeader)?;
    let nodes: Vec<String> = header.iter().skip(1).cloned().collect();

    let mut correlations = Correlations::new();
    let mut stats = ReduceStats::default();

    for (data_row_index, row) in table.data_rows().iter().enumerate() {
        let (row_node, cells) = row.split_first().ok_or(InputShapeError::EmptyRow {
            row: data_row_index,
        })?;
        stats.data_rows += 1;

        // A repeated row name starts over with an empty mapping.
        let entries = correlations.insert_mut(row_node.clone(), OrderedMap::new());

        for (cell_position_index, cell) in cells.iter().enumerate() {
            if cell.trim().is_empty() {
                continue;
            }
            let Ok(value) = parse_value(cell) else {
                stats.skipped_non_numeric += 1;
                continue;
            };
            if cell_position_index <= data_row_index {
                stats.discarded_lower += 1;
                continue;
            }
            let column_node =
                nodes
                    .get(cell_position_index)
                    .ok_or_else(|| InputShapeError::RaggedRow {
                        row: data_row_index,
                        node: row_node.clone(),
                        position: cell_position_index,
                        header_width: nodes.len(),
                    })?;
            entries.insert(column_node.clone(), value);
        }
    }

    let document = Document {
        nodes,
        correlations,
    };
    stats.entries = document.entry_count();
    Ok((document, stats))
}
