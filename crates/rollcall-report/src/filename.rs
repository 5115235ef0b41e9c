//! Suggested download filename for the processed report.

use chrono::NaiveDate;

/// Date-stamped filename for the processed report,
/// e.g. `Processed_Attendance_Report_2026-08-06.csv`.
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("Processed_Attendance_Report_{}.csv", date.format("%Y-%m-%d"))
}
