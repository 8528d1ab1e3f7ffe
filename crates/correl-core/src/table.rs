//! In-memory table model and CSV ingestion.
//!
//! The table is read whole: row 0 is the header, every later row is a data
//! row. Cells are kept verbatim; interpretation belongs to the reducer.

use std::io;
use std::path::Path;

use crate::errors::ReadError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Ordered rows of text cells. Rows may differ in width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Read a comma-separated table from `path`.
    pub fn from_path(path: &Path) -> Result<Self, ReadError> {
        let file = std::fs::File::open(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Read a comma-separated table from `reader`. `source` names the
    /// origin in error messages.
    ///
    /// Every blank physical line becomes a row with no cells, wherever it
    /// appears; the reducer rejects such rows. Line breaks inside quoted
    /// fields are part of the field.
    pub fn from_reader<R: io::Read>(mut reader: R, source: &Path) -> Result<Self, ReadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| ReadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        // The csv reader skips blank lines silently. Each read consumes the
        // skipped lines plus one record, so blank lines are recovered from
        // the start of every consumed span.
        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        let mut consumed = 0usize;
        loop {
            let more = rdr.read_record(&mut record).map_err(|e| ReadError::from_csv(source, e))?;
            let end = if more {
                rdr.position().byte() as usize
            } else {
                bytes.len()
            };
            let blank = leading_blank_lines(bytes, consumed, end);
            rows.extend(std::iter::repeat_with(Vec::new).take(blank));
            if !more {
                break;
            }
            rows.push(record.iter().map(str::to_owned).collect());
            consumed = end;
        }

        tracing::debug!(source = %source.display(), rows = rows.len(), "table loaded");
        Ok(Self { rows })
    }

    /// Parse a table held in memory.
    pub fn parse_str(text: &str) -> Result<Self, ReadError> {
        Self::from_reader(text.as_bytes(), Path::new("<string>"))
    }

    /// The header row, if the table has any rows at all.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Length of the line terminator starting at `i` (`\r\n`, `\r` or `\n`), or 0.
fn terminator_len(bytes: &[u8], i: usize) -> usize {
    match bytes.get(i) {
        Some(b'\r') if bytes.get(i + 1) == Some(&b'\n') => 2,
        Some(b'\r') | Some(b'\n') => 1,
        _ => 0,
    }
}

/// Count the empty lines at the start of `bytes[start..end]`.
///
/// `start` is where the previous record's read stopped. If that read left
/// the record's own terminator unconsumed (the byte before `start` is not a
/// line break), the first terminator belongs to that record and is not a
/// blank line. A `\r\n` split across the boundary is one terminator.
fn leading_blank_lines(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut i = start;
    if start > 0 {
        match bytes[start - 1] {
            b'\r' if bytes.get(start) == Some(&b'\n') => i += 1,
            b'\r' | b'\n' => {}
            _ => i += terminator_len(bytes, i),
        }
    }

    let mut count = 0;
    while i < end {
        let len = terminator_len(bytes, i);
        if len == 0 {
            break;
        }
        count += 1;
        i += len;
    }
    count
}
