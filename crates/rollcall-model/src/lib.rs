//! Data model for attendance report reconciliation.
//!
//! Reports are loosely typed tables: one column can mix text, numbers, and
//! missing values. [`Cell`] makes that explicit with a tagged variant instead
//! of sentinel values, and [`Table`] tracks an ordered column schema alongside
//! the row data so serialization order is always well defined.

pub mod table;
pub mod value;

pub use table::Table;
pub use value::{Cell, format_numeric};
