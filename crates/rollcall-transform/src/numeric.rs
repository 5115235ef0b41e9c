//! Numeric coercion of designated columns.

use rollcall_model::{Cell, Table};

use crate::error::ValidationError;

/// Parse a string as a finite-or-infinite number.
///
/// A value parsing to NaN counts as unparseable: NaN is a null marker here,
/// and null markers are exactly what the validity check below looks for.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| !parsed.is_nan())
}

/// Convert every designated column to [`Cell::Number`] in place.
///
/// Non-parseable values (including already-missing cells) become missing
/// markers. After all columns are processed, if any designated column holds
/// at least one missing marker the call fails with a [`ValidationError`]
/// naming every offending column in designated order.
pub fn coerce_numeric_columns(
    table: &mut Table,
    columns: &[&str],
    label: &'static str,
) -> Result<(), ValidationError> {
    let mut offending = Vec::new();
    for column in columns {
        let Some(idx) = table.column_index(column) else {
            continue;
        };
        let mut has_invalid = false;
        for row in &mut table.rows {
            let coerced = match &row[idx] {
                Cell::Number(value) => Cell::Number(*value),
                Cell::Text(value) => match parse_numeric(value) {
                    Some(parsed) => Cell::Number(parsed),
                    None => Cell::Missing,
                },
                Cell::Missing => Cell::Missing,
            };
            if coerced.is_missing() {
                has_invalid = true;
            }
            row[idx] = coerced;
        }
        if has_invalid {
            offending.push((*column).to_string());
        }
    }

    if offending.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            label,
            columns: offending,
        })
    }
}
