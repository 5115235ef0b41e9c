//! End-of-run summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::commands::ProcessSummary;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Print the run summary. Silent when the report went to stdout, so the CSV
/// stream stays clean.
pub fn print_summary(summary: &ProcessSummary) {
    let Some(path) = &summary.output else {
        return;
    };
    println!("Output: {}", path.display());

    let mut table = Table::new();
    table.set_header(vec!["Students", "Group breaks", "Columns"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(summary.students).set_alignment(CellAlignment::Right),
        Cell::new(summary.separators).set_alignment(CellAlignment::Right),
        Cell::new(summary.columns.join(", ")),
    ]);
    println!("{table}");
}
