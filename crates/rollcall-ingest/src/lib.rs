//! Report ingestion: byte buffers in, raw-text tables out.
//!
//! Both input formats load every cell as text (or missing) — the loader never
//! auto-converts values to numbers or times. That guarantee matters for the
//! weekly report's `TotalMin` column, where a value like `"8:32"` must reach
//! the time codec unaltered; typing happens downstream in the coercion stage.

pub mod error;
pub mod loader;
pub mod validate;

pub use error::{LoadError, SchemaError};
pub use loader::{MAX_INPUT_SIZE, TableFormat, read_table};
pub use validate::validate_required_columns;
