//! Integration tests for the `process` subcommand plumbing.

use std::fs;
use std::path::PathBuf;

use rollcall_cli::cli::ProcessArgs;
use rollcall_cli::commands::run_process;

const WEEKLY: &str = "StudentName,TotalMin\n\"doe, john\",90:30\n\"smith, anne\",8:00\n";
const ATTENDANCE: &str = "Last Name,First Name,Lessons Complete,Difference,Hours Required,Total Hours\n\
doe,john,24,-1,10,12.5\nsmith,anne,30,2,20,19\n";

fn args(weekly: PathBuf, attendance: PathBuf, output_dir: PathBuf) -> ProcessArgs {
    ProcessArgs {
        weekly,
        attendance,
        sort: "hours_last_first".to_string(),
        columns: Vec::new(),
        output_dir: Some(output_dir),
        stdout: false,
    }
}

#[test]
fn writes_a_dated_report_with_default_columns() {
    let dir = tempfile::tempdir().unwrap();
    let weekly = dir.path().join("weekly.csv");
    let attendance = dir.path().join("attendance.csv");
    fs::write(&weekly, WEEKLY).unwrap();
    fs::write(&attendance, ATTENDANCE).unwrap();

    let out_dir = dir.path().join("out");
    let summary = run_process(&args(weekly, attendance, out_dir)).unwrap();

    let path = summary.output.expect("file output");
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("Processed_Attendance_Report_"));
    assert!(name.ends_with(".csv"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(
        "Last Name,First Name,Lessons Complete,Difference in Lessons,Weekly Hours,\
         Total Cumulative Hours,Hours Required,Hours Ahead/Behind\n"
    ));

    assert_eq!(summary.students, 2);
    assert_eq!(summary.separators, 1);
}

#[test]
fn explicit_column_selection_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let weekly = dir.path().join("weekly.csv");
    let attendance = dir.path().join("attendance.csv");
    fs::write(&weekly, WEEKLY).unwrap();
    fs::write(&attendance, ATTENDANCE).unwrap();

    let mut args = args(weekly, attendance, dir.path().join("out"));
    args.columns = vec!["Weekly Hours".to_string()];
    let summary = run_process(&args).unwrap();
    assert_eq!(
        summary.columns,
        vec!["Last Name", "First Name", "Weekly Hours"]
    );
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let weekly = dir.path().join("weekly.txt");
    let attendance = dir.path().join("attendance.csv");
    fs::write(&weekly, WEEKLY).unwrap();
    fs::write(&attendance, ATTENDANCE).unwrap();

    let err = run_process(&args(weekly, attendance, dir.path().to_path_buf())).unwrap_err();
    assert!(
        err.to_string()
            .contains("only .csv and .xlsx files are accepted")
    );
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let attendance = dir.path().join("attendance.csv");
    fs::write(&attendance, ATTENDANCE).unwrap();

    let err = run_process(&args(
        dir.path().join("nope.csv"),
        attendance,
        dir.path().to_path_buf(),
    ))
    .unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
