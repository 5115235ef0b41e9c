//! CSV rendering of the final table.

use rollcall_model::Table;

use crate::error::ReportError;

/// Render the table (including blank separator rows) as UTF-8 comma-separated
/// text with one header row. Missing cells render as empty fields; no index
/// column is added.
pub fn write_csv(table: &Table) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(rollcall_model::Cell::render))?;
    }
    let bytes = writer.into_inner().map_err(|error| error.into_error())?;
    Ok(bytes)
}
