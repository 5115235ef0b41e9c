//! Table loading from caller-supplied byte buffers.
//!
//! Format selection is by caller-supplied tag (derived from a file extension
//! at the boundary), never by content sniffing.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use rollcall_model::{Cell, Table};

use crate::error::LoadError;

/// Maximum accepted input size (16 MB). Inputs are fully buffered, so the cap
/// keeps per-invocation memory predictable.
pub const MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated delimited text.
    Csv,
    /// Spreadsheet binary (first worksheet is read).
    Xlsx,
}

impl TableFormat {
    /// Resolve a format tag from a file extension. Case-insensitive, with or
    /// without the leading dot. Unknown extensions are not a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension
            .trim_start_matches('.')
            .to_ascii_lowercase()
            .as_str()
        {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }
}

/// Load a table from a byte buffer.
///
/// Every cell loads as [`Cell::Text`] or [`Cell::Missing`]; values are never
/// auto-converted to numbers or times, so ambiguous strings like `"8:32"`
/// survive verbatim for the downstream codecs.
pub fn read_table(bytes: &[u8], format: TableFormat) -> Result<Table, LoadError> {
    if bytes.len() > MAX_INPUT_SIZE {
        return Err(LoadError::TooLarge {
            size: bytes.len(),
            limit: MAX_INPUT_SIZE,
        });
    }
    match format {
        TableFormat::Csv => read_csv(bytes),
        TableFormat::Xlsx => read_xlsx(bytes),
    }
}

fn read_csv(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::NoHeader);
    }

    let columns = header_names(headers.iter())?;
    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(text_cell).collect());
    }
    tracing::debug!(rows = table.height(), columns = table.width(), "loaded CSV table");
    Ok(table)
}

fn read_xlsx(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or(LoadError::NoHeader)?;
    if header_row.iter().all(|data| data_to_text(data).trim().is_empty()) {
        return Err(LoadError::NoHeader);
    }

    let columns = header_names(header_row.iter().map(data_to_text))?;
    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(data_cell).collect());
    }
    tracing::debug!(
        rows = table.height(),
        columns = table.width(),
        "loaded spreadsheet table"
    );
    Ok(table)
}

/// Normalize header names: trim whitespace and a UTF-8 BOM, reject empties.
fn header_names<I, S>(headers: I) -> Result<Vec<String>, LoadError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns = Vec::new();
    for (idx, header) in headers.enumerate() {
        let name = header.as_ref().trim_matches('\u{feff}').trim().to_string();
        if name.is_empty() {
            return Err(LoadError::EmptyColumnName { index: idx + 1 });
        }
        columns.push(name);
    }
    Ok(columns)
}

fn text_cell(raw: &str) -> Cell {
    Cell::from_text(raw.trim_matches('\u{feff}').trim())
}

/// Render a spreadsheet cell as its raw text form.
fn data_to_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) => rollcall_model::format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => if *value { "1" } else { "0" }.to_string(),
        Data::DateTime(value) => {
            if value.is_duration() {
                duration_text(value.as_f64())
            } else {
                rollcall_model::format_numeric(value.as_f64())
            }
        }
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.trim().to_string(),
        Data::Error(error) => {
            tracing::warn!(?error, "spreadsheet cell holds an error value");
            String::new()
        }
    }
}

fn data_cell(data: &Data) -> Cell {
    Cell::from_text(data_to_text(data))
}

/// Render a spreadsheet duration (serial days) as `H:MM:SS` text, the same
/// shape the time codec accepts from delimited-text input.
fn duration_text(serial_days: f64) -> String {
    let total_seconds = (serial_days * 86_400.0).round() as i64;
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
