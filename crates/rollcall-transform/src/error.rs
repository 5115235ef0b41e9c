//! Error types for column-level transformations.

use thiserror::Error;

/// A name field does not follow the expected `Last, First` convention.
#[derive(Debug, Error)]
#[error("Weekly report names must use 'Last, First' format in the StudentName column.")]
pub struct FormatError;

/// Designated numeric columns contain non-numeric values.
///
/// The message enumerates every offending column so the caller can show it to
/// an end user directly.
#[derive(Debug, Error)]
#[error("{label} has non-numeric values in: {}", .columns.join(", "))]
pub struct ValidationError {
    pub label: &'static str,
    pub columns: Vec<String>,
}

/// A clock-like string could not be parsed.
///
/// Non-fatal by design: callers map this to a zero duration at the boundary,
/// optionally logging it.
#[derive(Debug, Error)]
#[error("invalid time value: {value:?}")]
pub struct TimeParseError {
    pub value: String,
}
