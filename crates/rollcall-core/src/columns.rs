//! Column names and required sets for the two input reports.

pub const LAST_NAME: &str = "Last Name";
pub const FIRST_NAME: &str = "First Name";
pub const LESSONS_COMPLETE: &str = "Lessons Complete";
pub const DIFFERENCE: &str = "Difference";
pub const HOURS_REQUIRED: &str = "Hours Required";
pub const TOTAL_HOURS: &str = "Total Hours";
pub const STUDENT_NAME: &str = "StudentName";
pub const TOTAL_MIN: &str = "TotalMin";

pub const WEEKLY_HOURS: &str = "Weekly Hours";
pub const HOURS_AHEAD_BEHIND: &str = "Hours Ahead/Behind";
pub const DIFFERENCE_IN_LESSONS: &str = "Difference in Lessons";
pub const TOTAL_CUMULATIVE_HOURS: &str = "Total Cumulative Hours";

pub const WEEKLY_LABEL: &str = "Weekly report";
pub const ATTENDANCE_LABEL: &str = "Attendance report";

pub const REQUIRED_WEEKLY_COLUMNS: [&str; 2] = [STUDENT_NAME, TOTAL_MIN];
pub const REQUIRED_ATTENDANCE_COLUMNS: [&str; 6] = [
    LAST_NAME,
    FIRST_NAME,
    LESSONS_COMPLETE,
    DIFFERENCE,
    HOURS_REQUIRED,
    TOTAL_HOURS,
];
pub const NUMERIC_COLUMNS: [&str; 4] =
    [LESSONS_COMPLETE, DIFFERENCE, HOURS_REQUIRED, TOTAL_HOURS];

/// Columns a caller may select for the final report, in their conventional
/// order. `Last Name` and `First Name` are always prepended and are not part
/// of this list.
pub const SELECTABLE_COLUMNS: [&str; 6] = [
    LESSONS_COMPLETE,
    DIFFERENCE_IN_LESSONS,
    WEEKLY_HOURS,
    TOTAL_CUMULATIVE_HOURS,
    HOURS_REQUIRED,
    HOURS_AHEAD_BEHIND,
];
