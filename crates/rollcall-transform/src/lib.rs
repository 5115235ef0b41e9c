//! Column-level transformations for the reconciliation pipeline.
//!
//! This crate provides:
//! - **Name-key normalization**: derive the uniform (last, first) join key
//!   from each report's native name representation.
//! - **Numeric coercion**: convert designated columns to numbers, reporting
//!   every offending column on failure.
//! - **Time codec**: parse clock-like strings to minutes and re-render them
//!   in computational (`HH:MM`) and display (`H:MM`) forms.
//!
//! Validation-class failures ([`FormatError`], [`ValidationError`]) abort the
//! whole call. Per-cell time-parse failures are non-fatal: they are logged
//! and degrade to a zero duration, never propagated.

pub mod error;
pub mod names;
pub mod numeric;
pub mod timefmt;

pub use error::{FormatError, TimeParseError, ValidationError};
pub use names::{normalize_name_columns, split_weekly_names};
pub use numeric::{coerce_numeric_columns, parse_numeric};
pub use timefmt::{format_computational, format_display, minutes_from_cell, parse_minutes};
