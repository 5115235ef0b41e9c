//! Caller-facing processing options.

/// Row ordering for the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Sort by (Last Name, First Name) ascending. No group separators.
    LastFirst,
    /// Sort by (Hours Required, Last Name, First Name) ascending, with a
    /// blank separator row between Hours Required groups.
    #[default]
    HoursLastFirst,
}

impl SortOption {
    /// Resolve a caller-supplied option string, falling back to the default
    /// for anything unrecognized.
    pub fn from_option_str(value: &str) -> Self {
        match value {
            "last_first" => Self::LastFirst,
            "hours_last_first" => Self::HoursLastFirst,
            other => {
                tracing::debug!(option = other, "unrecognized sort option, using default");
                Self::default()
            }
        }
    }
}
