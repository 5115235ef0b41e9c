//! End-to-end tests for the reconciliation pipeline over CSV byte buffers.

use rollcall_core::process;
use rollcall_ingest::TableFormat;
use rollcall_model::Cell;

const WEEKLY: &[u8] = b"StudentName,TotalMin\n\
\"doe, john\",90:30\n\
\"Smith , ANNE\",25:04:00\n\
\"Brown, bob\",---\n\
\"ghost, gary\",10:00\n";

const ATTENDANCE: &[u8] = b"Last Name,First Name,Lessons Complete,Difference,Hours Required,Total Hours\n\
\" Doe \",John,24,-1,10,12.5\n\
smith,anne,30,2,10,9.25\n\
brown,bob,5,0,20,20\n\
orphan,olive,9,1,30,30\n";

fn all_columns() -> Vec<String> {
    [
        "Lessons Complete",
        "Difference in Lessons",
        "Weekly Hours",
        "Total Cumulative Hours",
        "Hours Required",
        "Hours Ahead/Behind",
    ]
    .iter()
    .map(|c| (*c).to_string())
    .collect()
}

fn run(sort: &str, columns: &[String]) -> rollcall_model::Table {
    process(
        WEEKLY,
        TableFormat::Csv,
        ATTENDANCE,
        TableFormat::Csv,
        sort,
        columns,
    )
    .unwrap()
}

#[test]
fn merges_sorts_and_separates_by_hours() {
    let output = run("hours_last_first", &all_columns());

    let mut expected = vec!["Last Name".to_string(), "First Name".to_string()];
    expected.extend(all_columns());
    assert_eq!(output.columns, expected);

    // 3 matched students + 1 separator between the 10h and 20h groups
    assert_eq!(output.height(), 4);
    assert_eq!(output.cell(0, "Last Name"), Some(&Cell::Text("doe".to_string())));
    assert_eq!(output.cell(1, "Last Name"), Some(&Cell::Text("smith".to_string())));
    assert!(output.rows[2].iter().all(|cell| cell.render().is_empty()));
    assert_eq!(output.cell(3, "Last Name"), Some(&Cell::Text("brown".to_string())));
}

#[test]
fn end_to_end_weekly_hours_and_derived_metric() {
    let output = run("hours_last_first", &all_columns());

    // doe/john: TotalMin 90:30, Total Hours 12.5, Hours Required 10
    assert_eq!(
        output.cell(0, "Weekly Hours"),
        Some(&Cell::Text("90:30".to_string()))
    );
    assert_eq!(output.cell(0, "Hours Ahead/Behind"), Some(&Cell::Number(2.5)));
    assert_eq!(
        output.cell(0, "Total Cumulative Hours"),
        Some(&Cell::Number(12.5))
    );

    // smith/anne: seconds truncated, hours unpadded in display form
    assert_eq!(
        output.cell(1, "Weekly Hours"),
        Some(&Cell::Text("25:04".to_string()))
    );
    assert_eq!(
        output.cell(1, "Hours Ahead/Behind"),
        Some(&Cell::Number(-0.75))
    );

    // brown/bob: "---" sentinel means zero duration
    assert_eq!(
        output.cell(3, "Weekly Hours"),
        Some(&Cell::Text("0:00".to_string()))
    );
}

#[test]
fn inner_join_drops_unmatched_rows_on_both_sides() {
    let output = run("last_first", &all_columns());
    let last_names: Vec<String> = output
        .rows
        .iter()
        .map(|row| row[0].render())
        .collect();
    // ghost (weekly only) and orphan (attendance only) never appear
    assert_eq!(last_names, vec!["brown", "doe", "smith"]);
}

#[test]
fn join_is_case_and_whitespace_insensitive() {
    // " Doe "/John in attendance matched "doe, john" in the weekly report
    let output = run("last_first", &all_columns());
    assert!(
        output
            .rows
            .iter()
            .any(|row| row[0].render() == "doe" && row[1].render() == "john")
    );
}

#[test]
fn last_first_sort_has_no_separators() {
    let output = run("last_first", &all_columns());
    assert_eq!(output.height(), 3);
    assert!(
        output
            .rows
            .iter()
            .all(|row| !row.iter().all(|cell| cell.render().is_empty()))
    );
}

#[test]
fn unrecognized_sort_falls_back_to_hours_grouping() {
    let output = run("alphabetical_or_whatever", &all_columns());
    assert_eq!(output.height(), 4); // separator present, so hours sort applied
}

#[test]
fn unknown_selected_columns_are_silently_dropped() {
    let output = run(
        "last_first",
        &["Weekly Hours".to_string(), "Shoe Size".to_string()],
    );
    assert_eq!(output.columns, vec!["Last Name", "First Name", "Weekly Hours"]);
}

#[test]
fn selected_column_order_is_preserved() {
    let output = run(
        "last_first",
        &[
            "Hours Required".to_string(),
            "Lessons Complete".to_string(),
        ],
    );
    assert_eq!(
        output.columns,
        vec!["Last Name", "First Name", "Hours Required", "Lessons Complete"]
    );
}

#[test]
fn missing_weekly_column_is_a_schema_error() {
    let weekly = b"StudentName\n\"doe, john\"\n";
    let err = process(
        weekly,
        TableFormat::Csv,
        ATTENDANCE,
        TableFormat::Csv,
        "hours_last_first",
        &all_columns(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Weekly report missing required columns: TotalMin"
    );
}

#[test]
fn missing_attendance_columns_are_all_named() {
    let attendance = b"Last Name,First Name\na,b\n";
    let err = process(
        WEEKLY,
        TableFormat::Csv,
        attendance,
        TableFormat::Csv,
        "hours_last_first",
        &all_columns(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Attendance report missing required columns: Lessons Complete, Difference, Hours Required, Total Hours"
    );
}

#[test]
fn non_numeric_attendance_value_is_a_validation_error() {
    let attendance = b"Last Name,First Name,Lessons Complete,Difference,Hours Required,Total Hours\n\
doe,john,ten,-1,10,12.5\n";
    let err = process(
        WEEKLY,
        TableFormat::Csv,
        attendance,
        TableFormat::Csv,
        "hours_last_first",
        &all_columns(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Attendance report has non-numeric values in: Lessons Complete"
    );
}

#[test]
fn weekly_name_without_comma_is_a_format_error() {
    let weekly = b"StudentName,TotalMin\ndoe john,90:30\n";
    let err = process(
        weekly,
        TableFormat::Csv,
        ATTENDANCE,
        TableFormat::Csv,
        "hours_last_first",
        &all_columns(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Weekly report names must use 'Last, First' format in the StudentName column."
    );
}

#[test]
fn unparseable_time_degrades_to_zero_not_an_error() {
    let weekly = b"StudentName,TotalMin\n\"doe, john\",ninety\n";
    let output = process(
        weekly,
        TableFormat::Csv,
        ATTENDANCE,
        TableFormat::Csv,
        "last_first",
        &all_columns(),
    )
    .unwrap();
    assert_eq!(
        output.cell(0, "Weekly Hours"),
        Some(&Cell::Text("0:00".to_string()))
    );
}
