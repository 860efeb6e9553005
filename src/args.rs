//! Command-line argument parsing using clap.
//!
//! Arguments follow the convention `calgrid [start] [end]` with dates given
//! as `YYYY-MM-DD`.

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::date::CalendarDate;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, DEFAULT_MONTHS_PER_PAGE, GUTTER_WIDTH_REGULAR,
    GridContext, WeekType,
};

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Displays calendar grids for a date range", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Display week numbers.
    #[arg(short = 'w', long, help_heading = "Calendar options")]
    pub week_numbers: bool,

    /// Week numbering system (iso or us).
    #[arg(
        long,
        default_value = "iso",
        help_heading = "Calendar options",
        value_name = "system"
    )]
    pub week_type: WeekType,

    /// Maximum number of months per page.
    #[arg(
        short = 'n',
        long = "months",
        default_value_t = DEFAULT_MONTHS_PER_PAGE,
        help_heading = "Display options",
        value_name = "num"
    )]
    pub months_per_page: u32,

    /// Page offset in months from the start date.
    #[arg(
        short = 'o',
        long,
        default_value_t = 0,
        help_heading = "Display options",
        value_name = "months",
        allow_hyphen_values = true
    )]
    pub offset: i32,

    /// Highlight days in an inclusive date range (FROM:TO).
    #[arg(long, help_heading = "Display options", value_name = "from:to")]
    pub highlight: Option<String>,

    /// Start date (YYYY-MM-DD) - optional, defaults to the current month.
    #[arg(index = 1, default_value = None, value_name = "start", value_hint = ValueHint::Other)]
    pub start_arg: Option<String>,

    /// End date (YYYY-MM-DD) - optional, defaults to the end of the start month.
    #[arg(index = 2, default_value = None, value_name = "end", value_hint = ValueHint::Other)]
    pub end_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display calendar grids for a date range.

Without any arguments, display the current month.

Examples:
  calgrid                                Display current month
  calgrid 2026-03-15                     Display March 2026
  calgrid 2026-01-01 2026-12-31          Display the first page of 2026
  calgrid 2026-01-01 2026-12-31 -o 6     Display the second page
  calgrid 2026-01-01 2026-03-31 -w       Display week numbers
  calgrid 2026-01-01 2026-03-31 --highlight 2026-02-10:2026-02-14";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let today = get_today_date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid columns value: {}", s))?;
                if n == 0 {
                    return Err("Columns must be positive".to_string());
                }
                ColumnsMode::Fixed(n)
            }
        };

        if args.months_per_page == 0 {
            return Err("Months per page must be positive".to_string());
        }

        Ok(GridContext {
            week_start: if args.sunday {
                chrono::Weekday::Sun
            } else {
                chrono::Weekday::Mon
            },
            week_numbers: args.week_numbers,
            week_type: args.week_type,
            color,
            today,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
        })
    }
}

/// Get today's date, respecting CALGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> CalendarDate {
    if let Ok(test_time) = std::env::var("CALGRID_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return CalendarDate::from_naive(date);
    }
    CalendarDate::from_naive(chrono::Local::now().date_naive())
}

/// Resolve the display range from positional arguments.
///
/// Argument patterns:
/// - no args: the current month
/// - 1 arg: the month containing the given date
/// - 2 args: the inclusive range between the two dates
pub fn get_display_range(args: &Args) -> Result<(CalendarDate, CalendarDate), String> {
    match (&args.start_arg, &args.end_arg) {
        (None, None) => {
            let today = get_today_date();
            Ok((today.start_of_month(), today.end_of_month()))
        }
        (Some(start), None) => {
            let start = CalendarDate::parse(start).map_err(|e| e.to_string())?;
            Ok((start, start.end_of_month()))
        }
        (Some(start), Some(end)) => {
            let start = CalendarDate::parse(start).map_err(|e| e.to_string())?;
            let end = CalendarDate::parse(end).map_err(|e| e.to_string())?;
            Ok((start, end))
        }
        (None, Some(_)) => Err("End date given without a start date".to_string()),
    }
}

/// Parse the --highlight argument into an inclusive date range.
pub fn get_highlight(args: &Args) -> Result<Option<(CalendarDate, CalendarDate)>, String> {
    let Some(range) = args.highlight.as_deref() else {
        return Ok(None);
    };
    let (from, to) = range
        .split_once(':')
        .ok_or_else(|| format!("Invalid highlight range: {} (expected FROM:TO)", range))?;
    let from = CalendarDate::parse(from).map_err(|e| e.to_string())?;
    let to = CalendarDate::parse(to).map_err(|e| e.to_string())?;
    if from > to {
        return Err(format!("Invalid highlight range: {} is after {}", from, to));
    }
    Ok(Some((from, to)))
}
