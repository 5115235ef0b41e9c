//! Command-line shell for the attendance reconciliation pipeline.
//!
//! The shell owns everything the core deliberately does not: file reading,
//! extension-based format tagging, the at-least-one-column rule, logging
//! setup, and writing the dated output file.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
