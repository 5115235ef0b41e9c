//! Error types for report ingestion.

use thiserror::Error;

/// Input bytes could not be read as a table in the declared format.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input exceeds the bounded-processing size cap.
    #[error("input is {size} bytes, which exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    /// CSV data failed to parse.
    #[error("failed to parse CSV data: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Spreadsheet data failed to parse.
    #[error("failed to read spreadsheet data: {source}")]
    Spreadsheet {
        #[from]
        source: calamine::Error,
    },

    /// Spreadsheet contains no worksheets.
    #[error("spreadsheet contains no worksheets")]
    NoWorksheet,

    /// Input has no header row.
    #[error("input table has no header row")]
    NoHeader,

    /// A header cell is empty after trimming.
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },
}

/// A table is missing columns that a downstream step requires.
///
/// The message enumerates every missing column, not just the first, plus the
/// label of the failing input.
#[derive(Debug, Error)]
#[error("{label} missing required columns: {}", .missing.join(", "))]
pub struct SchemaError {
    pub label: &'static str,
    pub missing: Vec<String>,
}
