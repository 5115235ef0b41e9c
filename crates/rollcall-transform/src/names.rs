//! Join-key normalization.
//!
//! Both reports must end up with `Last Name`/`First Name` columns holding
//! lowercase, whitespace-trimmed values. The merge is an inner join on that
//! pair, so normalization has to be applied identically to both tables or
//! unmatched rows silently vanish.

use rollcall_model::{Cell, Table};

use crate::error::FormatError;

/// Column the weekly report keys students by: one combined `Last, First`
/// field.
pub const STUDENT_NAME: &str = "StudentName";

/// Lowercase and trim the named columns in place.
///
/// Columns that do not exist are skipped; callers validate the schema before
/// this stage. Missing cells stay missing.
pub fn normalize_name_columns(table: &mut Table, columns: &[&str]) {
    for column in columns {
        let Some(idx) = table.column_index(column) else {
            continue;
        };
        for row in &mut table.rows {
            if let Cell::Text(value) = &row[idx] {
                row[idx] = Cell::from_text(value.trim().to_lowercase());
            }
        }
    }
}

/// Derive `Last Name`/`First Name` columns from the weekly report's combined
/// `StudentName` field.
///
/// The field splits on the first comma only — names carrying commas in a
/// suffix (e.g. `"Doe, Jr., John"`) are not a supported case. Any row whose
/// derived first-name part is empty after trimming (no comma, nothing after
/// it, or a missing cell) fails the whole call with [`FormatError`].
pub fn split_weekly_names(table: &mut Table) -> Result<(), FormatError> {
    let Some(idx) = table.column_index(STUDENT_NAME) else {
        return Ok(());
    };

    let mut last_names = Vec::with_capacity(table.height());
    let mut first_names = Vec::with_capacity(table.height());
    for row in &table.rows {
        let combined = match &row[idx] {
            Cell::Text(value) => value.as_str(),
            _ => "",
        };
        let (last, first) = match combined.split_once(',') {
            Some((last, first)) => (last, first),
            None => (combined, ""),
        };
        let first = first.trim().to_lowercase();
        if first.is_empty() {
            return Err(FormatError);
        }
        last_names.push(Cell::from_text(last.trim().to_lowercase()));
        first_names.push(Cell::Text(first));
    }

    table.add_column("Last Name", last_names);
    table.add_column("First Name", first_names);
    Ok(())
}
