//! Month grid construction: week counting, trailing-week policy, day cells.

use chrono::Weekday;

use crate::date::CalendarDate;
use crate::error::GridError;
use crate::types::{DAYS_PER_WEEK, Day, GridContext, Month, TagFn, Week, WeekType};

impl GridContext {
    /// Week number of the week containing `date`, per the configured system.
    pub fn week_number(&self, date: CalendarDate) -> u32 {
        match self.week_type {
            WeekType::Iso => date.iso_week_number(),
            WeekType::Us => {
                // US: week starts Sunday, week 1 contains January 1
                let days_since_jan1 = date.ordinal() - 1;
                let jan1_weekday = date.add_days(-i64::from(days_since_jan1)).weekday();
                (days_since_jan1 + jan1_weekday.num_days_from_sunday()) / 7 + 1
            }
        }
    }

    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Build the week grid for one month.
///
/// Weeks run from the week containing the 1st through the week containing the
/// last day of the month; cells outside the month are marked as fillers. When
/// `show_trailing_partial_week` is false and the final week spills into the
/// next month, that week is dropped; its in-month days then appear only as
/// leading fillers of the following month's grid. Leading partial weeks are
/// never dropped.
pub fn build_month(
    ctx: &GridContext,
    year: i32,
    month: u32,
    show_trailing_partial_week: bool,
    tag: Option<&TagFn>,
) -> Result<Month, GridError> {
    let first = CalendarDate::new(year, month, 1)?;
    let last = first.end_of_month();
    let grid_start = first.start_of_week(ctx.week_start);

    // Count week rows by walking week starts; day-count division miscounts
    // months that straddle an extra row.
    let mut week_count = 0usize;
    let mut cursor = grid_start;
    while cursor <= last {
        week_count += 1;
        cursor = cursor.add_days(7);
    }

    // The final week is partial when it runs past the last day of the month.
    let trailing_partial = last.start_of_week(ctx.week_start).add_days(6) > last;
    let trailing_week_suppressed = trailing_partial && !show_trailing_partial_week;
    if trailing_week_suppressed {
        week_count -= 1;
    }

    let mut weeks = Vec::with_capacity(week_count);
    let mut cursor = grid_start;
    for _ in 0..week_count {
        let number = ctx.week_numbers.then(|| ctx.week_number(cursor));
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);
        for _ in 0..DAYS_PER_WEEK {
            let tag_value = tag.and_then(|hook| hook(cursor));
            days.push(Day {
                date: cursor,
                number: cursor.day(),
                in_month: cursor.year() == year && cursor.month() == month,
                tag: tag_value,
            });
            cursor = cursor.add_days(1);
        }
        weeks.push(Week { number, days });
    }

    Ok(Month {
        year,
        month,
        weeks,
        trailing_week_suppressed,
    })
}
