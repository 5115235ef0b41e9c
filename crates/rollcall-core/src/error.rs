//! Pipeline error taxonomy.
//!
//! The component errors surface verbatim — their Display text is the message
//! shown to end users, so the wrapper is transparent. Validation-class
//! failures abort the whole call; no partial output is ever produced.

use thiserror::Error;

use rollcall_ingest::{LoadError, SchemaError};
use rollcall_transform::{FormatError, ValidationError};

#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input bytes unreadable or corrupt for the declared format.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Required columns absent from an input.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Weekly name field not in `Last, First` form.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Non-numeric values in designated numeric columns.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal invariant: a pipeline stage referenced a column the merged
    /// table does not carry.
    #[error("column '{0}' not found in merged table")]
    ColumnNotFound(String),
}
