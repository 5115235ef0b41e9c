//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Reconcile weekly and cumulative student attendance reports",
    long_about = "Merge a weekly attendance export (per-student minutes) with a\n\
                  cumulative attendance report (lessons, required and total hours)\n\
                  into one sorted CSV report for staff review."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the two reports and write the processed CSV.
    Process(ProcessArgs),

    /// List the columns that can be selected for the output report.
    Columns,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Weekly attendance report (.csv or .xlsx).
    #[arg(value_name = "WEEKLY_REPORT")]
    pub weekly: PathBuf,

    /// Cumulative attendance report (.csv or .xlsx).
    #[arg(value_name = "ATTENDANCE_REPORT")]
    pub attendance: PathBuf,

    /// Row ordering: last_first, or hours_last_first (grouped with blank
    /// separator rows). Unrecognized values fall back to hours_last_first.
    #[arg(long = "sort", default_value = "hours_last_first", value_name = "ORDER")]
    pub sort: String,

    /// Output columns, comma-separated (default: all selectable columns).
    /// `rollcall columns` lists the accepted names.
    #[arg(long = "columns", value_delimiter = ',', value_name = "NAME")]
    pub columns: Vec<String>,

    /// Directory for the processed report (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write the processed CSV to stdout instead of a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
