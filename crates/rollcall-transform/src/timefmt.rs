//! Time codec for clock-like duration strings.
//!
//! Weekly totals arrive as free-form text (`"8:32"`, `"25:04:00"`, `"---"`).
//! Internally a value is total minutes; it renders in two shapes:
//! computational `HH:MM` (zero-padded) while the pipeline works with it, and
//! display `H:MM` (hours unpadded) in the final report. The pipeline parses
//! the computational string a second time when producing the display form;
//! that round-trip is part of the observable contract and is kept as is.

use rollcall_model::{Cell, format_numeric};

use crate::error::TimeParseError;

/// Values meaning "no time recorded". Matched case-sensitively after trim.
const ZERO_SENTINELS: [&str; 3] = ["---", "", "nan"];

/// Parse a clock-like string into total minutes.
///
/// Sentinel values parse as zero. Otherwise the first `:`-separated token is
/// hours and the second is minutes (absent means 0); any further tokens
/// (seconds) are truncated away. Non-integer tokens are an error — callers
/// decide whether that is fatal.
pub fn parse_minutes(raw: &str) -> Result<u32, TimeParseError> {
    let trimmed = raw.trim();
    if ZERO_SENTINELS.contains(&trimmed) {
        return Ok(0);
    }

    let mut tokens = trimmed.split(':');
    let hours = parse_token(tokens.next().unwrap_or(""), raw)?;
    let minutes = match tokens.next() {
        Some(token) => parse_token(token, raw)?,
        None => 0,
    };
    hours
        .checked_mul(60)
        .and_then(|hours| hours.checked_add(minutes))
        .ok_or_else(|| TimeParseError {
            value: raw.to_string(),
        })
}

fn parse_token(token: &str, raw: &str) -> Result<u32, TimeParseError> {
    token.trim().parse::<u32>().map_err(|_| TimeParseError {
        value: raw.to_string(),
    })
}

/// Minutes from a table cell, degrading to zero on failure.
///
/// Missing cells are zero. Parse failures are logged and coerced to zero;
/// they never abort the pipeline.
pub fn minutes_from_cell(cell: &Cell) -> u32 {
    let raw = match cell {
        Cell::Missing => return 0,
        Cell::Text(value) => value.clone(),
        Cell::Number(value) => format_numeric(*value),
    };
    match parse_minutes(&raw) {
        Ok(minutes) => minutes,
        Err(error) => {
            tracing::warn!(%error, "failed to parse time value, using 00:00");
            0
        }
    }
}

/// Render minutes as zero-padded `HH:MM`. Hours may exceed two digits.
pub fn format_computational(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Re-render an `HH:MM` string as display-friendly `H:MM` (hours unpadded).
///
/// Any internal error logs and falls back to `"0:00"`.
pub fn format_display(hours_minutes: &str) -> String {
    match try_format_display(hours_minutes) {
        Ok(formatted) => formatted,
        Err(error) => {
            tracing::warn!(%error, "failed to format hours and minutes, using 0:00");
            "0:00".to_string()
        }
    }
}

fn try_format_display(hours_minutes: &str) -> Result<String, TimeParseError> {
    let invalid = || TimeParseError {
        value: hours_minutes.to_string(),
    };
    let (hours, minutes) = hours_minutes.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
    Ok(format!("{hours}:{minutes:02}"))
}
