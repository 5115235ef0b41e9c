//! Schema validation: does a table expose every column a downstream step
//! requires?

use rollcall_model::Table;

use crate::error::SchemaError;

/// Check that `table` exposes all `required` columns.
///
/// Fails with a [`SchemaError`] naming every missing column in the required
/// order, plus the label of which input failed — the message is shown to end
/// users verbatim.
pub fn validate_required_columns(
    table: &Table,
    required: &[&str],
    label: &'static str,
) -> Result<(), SchemaError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| (*column).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError { label, missing })
    }
}
