//! Type definitions and constants for calendar grids.

use chrono::Weekday;
use clap::ValueEnum;

use crate::date::CalendarDate;

/// Week numbering system for calendar display.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum WeekType {
    /// ISO 8601: week starts on Monday, week 1 contains the first Thursday.
    Iso,
    /// US style: week starts on Sunday, week 1 contains January 1.
    Us,
}

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Grid computation and display options.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// First day of the week.
    pub week_start: Weekday,
    /// Whether to compute and display week numbers.
    pub week_numbers: bool,
    /// Week numbering system (ISO or US).
    pub week_type: WeekType,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: CalendarDate,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
}

/// Per-day customization hook.
///
/// Invoked once per displayed day cell; returning `None` leaves the cell
/// untagged. Any closure state belongs entirely to the caller.
pub type TagFn<'a> = dyn Fn(CalendarDate) -> Option<String> + 'a;

/// One cell of a rendered week.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    /// The calendar date behind this cell.
    pub date: CalendarDate,
    /// Day-of-month number.
    pub number: u32,
    /// False for filler cells that belong to an adjacent month.
    pub in_month: bool,
    /// Opaque tag produced by the customization hook, if any.
    pub tag: Option<String>,
}

/// A week row of exactly seven days, in week-start order.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    /// Week number of the first day, when week numbers are requested.
    pub number: Option<u32>,
    pub days: Vec<Day>,
}

/// The rendered grid for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct Month {
    pub year: i32,
    /// Month of year (1..=12).
    pub month: u32,
    /// Contiguous week rows in increasing date order.
    pub weeks: Vec<Week>,
    /// Whether the final partial week was dropped from the grid.
    pub trailing_week_suppressed: bool,
}

/// One page of months over a date range, with navigability flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePlan {
    pub months: Vec<Month>,
    /// True when months of the range precede the first displayed month.
    pub can_go_back: bool,
    /// True when months of the range follow the last displayed month.
    pub can_go_forward: bool,
}

// Constants for calendar formatting
pub const DAYS_PER_WEEK: usize = 7;
pub const DEFAULT_MONTHS_PER_PAGE: u32 = 6;
pub const GUTTER_WIDTH_REGULAR: usize = 2;

// Color is enabled by default
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
pub const COLOR_DIM: &str = "\x1b[2m";
