//! Calendar date value type and arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::error::GridError;

/// A Gregorian calendar date.
///
/// Months are 1-indexed (1..=12) everywhere, matching chrono; days of month
/// are 1-indexed as well. Values are immutable; every arithmetic method
/// returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year, month (1..=12) and day of month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, GridError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(GridError::InvalidDate { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` date string.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| GridError::UnparsableDate {
                input: s.to_string(),
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-based).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of year (1-based).
    pub fn ordinal(self) -> u32 {
        self.0.ordinal()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Position of this date within a week starting on `week_start` (0..=6).
    pub fn weekday_index(self, week_start: Weekday) -> u32 {
        self.0.weekday().days_since(week_start)
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Shift by whole calendar months. The day of month is clamped to the
    /// target month's length (Jan 31 + 1 month = Feb 28 or 29).
    pub fn add_months(self, months: i32) -> Self {
        if months >= 0 {
            Self(self.0 + Months::new(months as u32))
        } else {
            Self(self.0 - Months::new(months.unsigned_abs()))
        }
    }

    /// Most recent `week_start` day on or before this date.
    pub fn start_of_week(self, week_start: Weekday) -> Self {
        self.add_days(-i64::from(self.weekday_index(week_start)))
    }

    pub fn start_of_month(self) -> Self {
        self.add_days(-i64::from(self.0.day() - 1))
    }

    pub fn end_of_month(self) -> Self {
        self.start_of_month().add_months(1).add_days(-1)
    }

    /// Number of days in this date's month, derived from month boundaries.
    pub fn days_in_month(self) -> u32 {
        self.end_of_month().day()
    }

    /// Signed count of calendar-month steps from `earlier` to `self`. Days of
    /// month are ignored, so Jan 31 to Feb 1 is one step.
    pub fn month_diff(self, earlier: Self) -> i32 {
        (self.year() - earlier.year()) * 12 + self.month() as i32 - earlier.month() as i32
    }

    /// ISO 8601 week number (weeks start Monday; week 1 contains the first
    /// Thursday of the year).
    pub fn iso_week_number(self) -> u32 {
        self.0.iso_week().week()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
