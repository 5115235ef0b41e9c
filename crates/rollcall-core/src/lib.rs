//! Report reconciliation: merge a weekly attendance export with a cumulative
//! attendance report into one sorted, formatted table.
//!
//! The entry point is [`process`], a single-shot batch transform: two byte
//! buffers in, one projected [`rollcall_model::Table`] out. The pipeline
//! holds no state across invocations — callers may run any number of
//! invocations concurrently without coordination.
//!
//! Stages, in order: load → schema validation → name-key normalization →
//! numeric coercion → weekly-hours codec → inner join → derived metrics →
//! sort → rounding → renames → display re-render → projection with
//! group-break separators.

pub mod columns;
pub mod engine;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod project;

pub use error::ProcessError;
pub use options::SortOption;
pub use pipeline::process;
