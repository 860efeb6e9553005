//! Range planning: pagination windows, month enumeration, navigability.

use crate::date::CalendarDate;
use crate::error::GridError;
use crate::grid::build_month;
use crate::types::{GridContext, RangePlan, TagFn};

/// Plan one page of months covering the inclusive range `[start, end]`.
///
/// `page_offset` shifts the window by whole months from `start`; offsets that
/// push the window partly or fully outside the range yield a truncated or
/// empty page rather than an error. The trailing partial week is shown only
/// for the month containing `end`; every earlier month defers that week to
/// its successor's leading fillers, so no week row appears twice.
pub fn plan_range(
    ctx: &GridContext,
    start: CalendarDate,
    end: CalendarDate,
    max_months_per_page: u32,
    page_offset: i32,
    tag: Option<&TagFn>,
) -> Result<RangePlan, GridError> {
    if start > end {
        return Err(GridError::StartAfterEnd { start, end });
    }
    if max_months_per_page == 0 {
        return Err(GridError::ZeroMonthsPerPage);
    }

    // Calendar-month steps, not elapsed days; a two-day range spanning a
    // month boundary still covers two months.
    let total_months = end.month_diff(start) + 1;
    let months_to_show = total_months.min(max_months_per_page as i32);

    let mut window_start = start.add_months(page_offset);

    // A window start inside the final, mostly-foreign week of its own month
    // is rendered as part of the next month's grid; enumerating from its own
    // month would paint that week row under two headers.
    let next_month_first = window_start.start_of_month().add_months(1);
    if window_start.start_of_week(ctx.week_start) == next_month_first.start_of_week(ctx.week_start)
    {
        window_start = window_start.add_days(7);
    }

    let start_key = month_key(start);
    let end_key = month_key(end);

    let mut months = Vec::new();
    let mut first_shown = None;
    let mut last_shown = None;

    let mut cursor = window_start.start_of_month();
    for _ in 0..months_to_show {
        let key = month_key(cursor);
        // Months outside the range are skipped, not errors; a fully
        // out-of-range window produces an empty page.
        if (start_key..=end_key).contains(&key) {
            let show_trailing = key == end_key;
            months.push(build_month(
                ctx,
                cursor.year(),
                cursor.month(),
                show_trailing,
                tag,
            )?);
            first_shown.get_or_insert(cursor);
            last_shown = Some(cursor);
        }
        cursor = cursor.add_months(1);
    }

    let (can_go_back, can_go_forward) = match (first_shown, last_shown) {
        (Some(first), Some(last)) => (first > start, last.end_of_month() < end),
        // Empty page: navigability follows which side of the range the
        // window fell on.
        _ => (window_start > start, window_start < start),
    };

    Ok(RangePlan {
        months,
        can_go_back,
        can_go_forward,
    })
}

/// Offset of the page after the current one. Pure; never clamps.
pub fn next_page_offset(page_offset: i32, max_months_per_page: u32) -> i32 {
    page_offset + max_months_per_page as i32
}

/// Offset of the page before the current one. Pure; never clamps.
pub fn previous_page_offset(page_offset: i32, max_months_per_page: u32) -> i32 {
    page_offset - max_months_per_page as i32
}

fn month_key(date: CalendarDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}
