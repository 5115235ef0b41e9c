//! The single-shot processing pipeline.

use rollcall_ingest::{TableFormat, read_table, validate_required_columns};
use rollcall_model::{Cell, Table};
use rollcall_transform::{
    coerce_numeric_columns, format_computational, minutes_from_cell, normalize_name_columns,
    split_weekly_names,
};

use crate::columns::{
    ATTENDANCE_LABEL, FIRST_NAME, HOURS_AHEAD_BEHIND, LAST_NAME, NUMERIC_COLUMNS,
    REQUIRED_ATTENDANCE_COLUMNS, REQUIRED_WEEKLY_COLUMNS, TOTAL_HOURS, TOTAL_MIN, WEEKLY_HOURS,
    WEEKLY_LABEL,
};
use crate::engine::{
    column, derive_hours_ahead, inner_join, rename_for_output, rerender_weekly_hours,
    round_columns, sort_rows,
};
use crate::error::ProcessError;
use crate::options::SortOption;
use crate::project::project_with_separators;

/// Reconcile the two reports into one merged, sorted, projected table.
///
/// Inputs are fully-buffered byte buffers with caller-supplied format tags.
/// `sort_option` is resolved leniently (unrecognized values fall back to the
/// default ordering). `selected_columns` must be non-empty — enforcing that
/// is the caller's responsibility, not this function's.
///
/// On any validation-class failure the call aborts with no partial output.
pub fn process(
    weekly: &[u8],
    weekly_format: TableFormat,
    attendance: &[u8],
    attendance_format: TableFormat,
    sort_option: &str,
    selected_columns: &[String],
) -> Result<Table, ProcessError> {
    let mut attendance_table = read_table(attendance, attendance_format)?;
    let mut weekly_table = read_table(weekly, weekly_format)?;
    tracing::info!(
        attendance_rows = attendance_table.height(),
        weekly_rows = weekly_table.height(),
        "loaded input reports"
    );

    validate_required_columns(
        &attendance_table,
        &REQUIRED_ATTENDANCE_COLUMNS,
        ATTENDANCE_LABEL,
    )?;
    validate_required_columns(&weekly_table, &REQUIRED_WEEKLY_COLUMNS, WEEKLY_LABEL)?;

    normalize_name_columns(&mut attendance_table, &[LAST_NAME, FIRST_NAME]);
    split_weekly_names(&mut weekly_table)?;
    coerce_numeric_columns(&mut attendance_table, &NUMERIC_COLUMNS, ATTENDANCE_LABEL)?;

    append_weekly_hours(&mut weekly_table)?;

    let sort = SortOption::from_option_str(sort_option);
    let mut merged = inner_join(&attendance_table, &weekly_table)?;
    derive_hours_ahead(&mut merged)?;
    sort_rows(&mut merged, sort)?;
    round_columns(&mut merged, &[TOTAL_HOURS, HOURS_AHEAD_BEHIND]);
    rename_for_output(&mut merged);
    rerender_weekly_hours(&mut merged)?;

    let output = project_with_separators(&merged, sort, selected_columns)?;
    tracing::info!(
        rows = output.height(),
        columns = output.width(),
        "reconciliation complete"
    );
    Ok(output)
}

/// Parse the raw `TotalMin` text and append the working `Weekly Hours`
/// column in computational `HH:MM` form. Unparseable cells degrade to zero
/// duration; they never abort the pipeline.
fn append_weekly_hours(table: &mut Table) -> Result<(), ProcessError> {
    let idx = column(table, TOTAL_MIN)?;
    let cells = table
        .rows
        .iter()
        .map(|row| Cell::Text(format_computational(minutes_from_cell(&row[idx]))))
        .collect();
    table.add_column(WEEKLY_HOURS, cells);
    Ok(())
}
