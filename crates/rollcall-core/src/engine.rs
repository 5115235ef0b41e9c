//! Reconciliation engine: inner join, derived metrics, ordering, renames.

use std::cmp::Ordering;
use std::collections::HashMap;

use rollcall_model::{Cell, Table, format_numeric};
use rollcall_transform::format_display;

use crate::columns::{
    DIFFERENCE, DIFFERENCE_IN_LESSONS, FIRST_NAME, HOURS_AHEAD_BEHIND, HOURS_REQUIRED, LAST_NAME,
    LESSONS_COMPLETE, TOTAL_CUMULATIVE_HOURS, TOTAL_HOURS, WEEKLY_HOURS,
};
use crate::error::ProcessError;
use crate::options::SortOption;

/// Resolve a column index or fail with the pipeline's internal error.
pub(crate) fn column(table: &Table, name: &str) -> Result<usize, ProcessError> {
    table
        .column_index(name)
        .ok_or_else(|| ProcessError::ColumnNotFound(name.to_string()))
}

/// The (last, first) join key for one row. Name cells are already normalized
/// by the time the engine runs; anything else renders through the standard
/// output form so equal keys compare equal on both sides.
fn key_part(cell: &Cell) -> String {
    match cell {
        Cell::Text(value) => value.clone(),
        Cell::Number(value) => format_numeric(*value),
        Cell::Missing => String::new(),
    }
}

/// Inner-join the attendance and weekly tables on (Last Name, First Name).
///
/// Attendance row order drives output order; every attendance match pairs
/// with every weekly match in weekly order, so duplicate keys multiply. Rows
/// present in only one table are dropped with no diagnostic beyond a debug
/// count.
pub fn inner_join(attendance: &Table, weekly: &Table) -> Result<Table, ProcessError> {
    let att_last = column(attendance, LAST_NAME)?;
    let att_first = column(attendance, FIRST_NAME)?;
    let carried = [
        att_last,
        att_first,
        column(attendance, LESSONS_COMPLETE)?,
        column(attendance, DIFFERENCE)?,
        column(attendance, HOURS_REQUIRED)?,
        column(attendance, TOTAL_HOURS)?,
    ];
    let weekly_last = column(weekly, LAST_NAME)?;
    let weekly_first = column(weekly, FIRST_NAME)?;
    let weekly_hours = column(weekly, WEEKLY_HOURS)?;

    let mut by_key: HashMap<(String, String), Vec<usize>> = HashMap::new();
    for (idx, row) in weekly.rows.iter().enumerate() {
        let key = (key_part(&row[weekly_last]), key_part(&row[weekly_first]));
        by_key.entry(key).or_default().push(idx);
    }

    let mut merged = Table::new(vec![
        LAST_NAME.to_string(),
        FIRST_NAME.to_string(),
        LESSONS_COMPLETE.to_string(),
        DIFFERENCE.to_string(),
        HOURS_REQUIRED.to_string(),
        TOTAL_HOURS.to_string(),
        WEEKLY_HOURS.to_string(),
    ]);
    for row in &attendance.rows {
        let key = (key_part(&row[att_last]), key_part(&row[att_first]));
        let Some(matches) = by_key.get(&key) else {
            continue;
        };
        for &weekly_idx in matches {
            let mut cells: Vec<Cell> = carried.iter().map(|&idx| row[idx].clone()).collect();
            cells.push(weekly.rows[weekly_idx][weekly_hours].clone());
            merged.push_row(cells);
        }
    }

    tracing::debug!(
        attendance_rows = attendance.height(),
        weekly_rows = weekly.height(),
        merged_rows = merged.height(),
        "inner join complete"
    );
    Ok(merged)
}

/// Derive `Hours Ahead/Behind` = Total Hours - Hours Required.
pub fn derive_hours_ahead(table: &mut Table) -> Result<(), ProcessError> {
    let total = column(table, TOTAL_HOURS)?;
    let required = column(table, HOURS_REQUIRED)?;
    let cells = table
        .rows
        .iter()
        .map(|row| match (row[total].as_number(), row[required].as_number()) {
            (Some(total), Some(required)) => Cell::Number(total - required),
            _ => Cell::Missing,
        })
        .collect();
    table.add_column(HOURS_AHEAD_BEHIND, cells);
    Ok(())
}

/// Stable-sort rows by the requested ordering.
pub fn sort_rows(table: &mut Table, sort: SortOption) -> Result<(), ProcessError> {
    let last = column(table, LAST_NAME)?;
    let first = column(table, FIRST_NAME)?;
    match sort {
        SortOption::LastFirst => {
            table.rows.sort_by(|a, b| {
                key_part(&a[last])
                    .cmp(&key_part(&b[last]))
                    .then_with(|| key_part(&a[first]).cmp(&key_part(&b[first])))
            });
        }
        SortOption::HoursLastFirst => {
            let required = column(table, HOURS_REQUIRED)?;
            table.rows.sort_by(|a, b| {
                cmp_numbers(a[required].as_number(), b[required].as_number())
                    .then_with(|| key_part(&a[last]).cmp(&key_part(&b[last])))
                    .then_with(|| key_part(&a[first]).cmp(&key_part(&b[first])))
            });
        }
    }
    Ok(())
}

fn cmp_numbers(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Round numeric cells of the named columns to 2 decimal places.
pub fn round_columns(table: &mut Table, names: &[&str]) {
    for name in names {
        let Some(idx) = table.column_index(name) else {
            continue;
        };
        for row in &mut table.rows {
            if let Cell::Number(value) = row[idx] {
                row[idx] = Cell::Number(round2(value));
            }
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply the output column renames.
pub fn rename_for_output(table: &mut Table) {
    table.rename_column(DIFFERENCE, DIFFERENCE_IN_LESSONS);
    table.rename_column(TOTAL_HOURS, TOTAL_CUMULATIVE_HOURS);
}

/// Re-render the working `HH:MM` weekly-hours strings in display form.
pub fn rerender_weekly_hours(table: &mut Table) -> Result<(), ProcessError> {
    let idx = column(table, WEEKLY_HOURS)?;
    for row in &mut table.rows {
        if let Cell::Text(value) = &row[idx] {
            row[idx] = Cell::Text(format_display(value));
        }
    }
    Ok(())
}
