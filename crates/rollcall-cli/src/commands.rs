//! Subcommand implementations.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use comfy_table::Table;
use tracing::info;

use rollcall_core::columns::SELECTABLE_COLUMNS;
use rollcall_core::process;
use rollcall_ingest::{MAX_INPUT_SIZE, TableFormat};
use rollcall_report::{suggested_filename, write_csv};

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;

/// What a `process` run produced, for the end-of-run summary.
#[derive(Debug)]
pub struct ProcessSummary {
    /// Path of the written report; None when it went to stdout.
    pub output: Option<PathBuf>,
    /// Student rows in the report (separators excluded).
    pub students: usize,
    /// Blank group-separator rows.
    pub separators: usize,
    /// Final output columns.
    pub columns: Vec<String>,
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessSummary> {
    let weekly_format = format_for(&args.weekly)?;
    let attendance_format = format_for(&args.attendance)?;
    let weekly = read_input(&args.weekly)?;
    let attendance = read_input(&args.attendance)?;

    // The core treats an empty selection as a caller bug; default to the
    // full selectable list.
    let columns: Vec<String> = if args.columns.is_empty() {
        SELECTABLE_COLUMNS.iter().map(|c| (*c).to_string()).collect()
    } else {
        args.columns.clone()
    };

    let table = process(
        &weekly,
        weekly_format,
        &attendance,
        attendance_format,
        &args.sort,
        &columns,
    )?;
    let bytes = write_csv(&table)?;

    let separators = table
        .rows
        .iter()
        .filter(|row| row.iter().all(|cell| cell.render().is_empty()))
        .count();
    let students = table.height() - separators;

    let output = if args.stdout {
        io::stdout()
            .write_all(&bytes)
            .context("failed to write report to stdout")?;
        None
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        let path = dir.join(suggested_filename(Local::now().date_naive()));
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), students, "wrote processed report");
        Some(path)
    };

    Ok(ProcessSummary {
        output,
        students,
        separators,
        columns: table.columns,
    })
}

pub fn run_columns() {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Description"]);
    apply_table_style(&mut table);
    for column in SELECTABLE_COLUMNS {
        table.add_row(vec![column, describe_column(column)]);
    }
    println!("{table}");
}

fn describe_column(column: &str) -> &'static str {
    match column {
        "Lessons Complete" => "Lessons completed to date",
        "Difference in Lessons" => "Lesson-count difference",
        "Weekly Hours" => "Time attended this week (H:MM)",
        "Total Cumulative Hours" => "Hours attended to date",
        "Hours Required" => "Hours required to date",
        "Hours Ahead/Behind" => "Cumulative hours minus required hours",
        _ => "",
    }
}

/// Resolve a file's format tag from its extension. Only .csv and .xlsx are
/// accepted; there is no content sniffing.
fn format_for(path: &Path) -> Result<TableFormat> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    TableFormat::from_extension(extension).with_context(|| {
        format!(
            "unsupported file type for {}: only .csv and .xlsx files are accepted",
            path.display()
        )
    })
}

/// Read an input file, refusing anything over the 16 MB cap before buffering.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if metadata.len() > MAX_INPUT_SIZE as u64 {
        bail!(
            "{} is larger than the {} MB input limit",
            path.display(),
            MAX_INPUT_SIZE / (1024 * 1024)
        );
    }
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
