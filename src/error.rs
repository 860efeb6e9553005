//! Error types for grid construction and range planning.

use crate::date::CalendarDate;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The components do not form a real calendar date.
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The input string is not a `YYYY-MM-DD` date.
    #[error("unparsable date {input:?} (expected YYYY-MM-DD)")]
    UnparsableDate { input: String },

    /// The range is inverted; the start must be on or before the end.
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// A page must hold at least one month.
    #[error("months per page must be positive")]
    ZeroMonthsPerPage,
}
