//! Rendering of the reconciled report: CSV byte stream plus the suggested
//! download filename.

pub mod error;
pub mod filename;
pub mod serializer;

pub use error::ReportError;
pub use filename::suggested_filename;
pub use serializer::write_csv;
