//! Final column projection and group-break separator insertion.

use rollcall_model::{Cell, Table};

use crate::columns::{FIRST_NAME, HOURS_REQUIRED, LAST_NAME};
use crate::engine::column;
use crate::error::ProcessError;
use crate::options::SortOption;

/// The final column list: the two name columns, then every caller-selected
/// column that exists in the merged table, in caller order. Unknown requested
/// columns are silently dropped.
pub fn final_columns(merged: &Table, selected: &[String]) -> Vec<String> {
    let mut columns = vec![LAST_NAME.to_string(), FIRST_NAME.to_string()];
    columns.extend(
        selected
            .iter()
            .filter(|name| merged.has_column(name))
            .cloned(),
    );
    columns
}

/// Project the merged table onto the final columns, inserting one blank row
/// at every `Hours Required` boundary when sorting by hours.
///
/// Grouping reads `Hours Required` from the merged table, so separators land
/// correctly even when that column is not projected. Under
/// [`SortOption::LastFirst`] no separators are inserted at all.
pub fn project_with_separators(
    merged: &Table,
    sort: SortOption,
    selected: &[String],
) -> Result<Table, ProcessError> {
    let names = final_columns(merged, selected);
    let indices = names
        .iter()
        .map(|name| column(merged, name))
        .collect::<Result<Vec<_>, _>>()?;
    let required = column(merged, HOURS_REQUIRED)?;

    let mut output = Table::new(names);
    let mut previous_hours: Option<f64> = None;
    for row in &merged.rows {
        let hours = row[required].as_number();
        if sort != SortOption::LastFirst
            && let (Some(previous), Some(current)) = (previous_hours, hours)
            && current != previous
        {
            // Separator rows are empty strings, not missing data.
            output.push_row(vec![Cell::Text(String::new()); output.width()]);
        }
        output.push_row(indices.iter().map(|&idx| row[idx].clone()).collect());
        previous_hours = hours;
    }
    Ok(output)
}
