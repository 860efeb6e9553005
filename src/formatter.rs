//! Terminal rendering of calendar grids with localization and color support.

use chrono::{Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::planner::{next_page_offset, previous_page_offset};
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, ColumnsMode,
    Day, GridContext, Month, RangePlan,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Get month name (1..=12) for the current locale.
pub fn get_month_name(month: u32) -> String {
    let locale = get_system_locale();
    let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
    date.format_localized("%B", locale).to_string()
}

/// Weekday sequence starting from the configured week start.
pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Get 2-character weekday abbreviation for the given locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width of one month grid.
pub fn month_width(ctx: &GridContext) -> usize {
    if ctx.week_numbers { 23 } else { 20 }
}

/// Format a centered month header with color.
pub fn format_month_header(year: i32, month: u32, width: usize, color: bool) -> String {
    let header = format!("{} {}", get_month_name(month), year);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Format weekday header row with optional week-number gutter and color.
pub fn format_weekday_headers(ctx: &GridContext) -> String {
    let locale = get_system_locale();
    let mut result = String::new();

    if ctx.week_numbers {
        result.push_str("   ");
    }

    if ctx.color {
        result.push_str(COLOR_SAND_YELLOW);
    }

    let order = weekday_order(ctx.week_start);
    for (i, &weekday) in order.iter().enumerate() {
        let short_name = get_weekday_short_name(weekday, locale);
        if i < 6 {
            result.push_str(&format!("{} ", short_name));
        } else {
            result.push_str(&short_name);
        }
    }

    if ctx.color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Format one day cell.
///
/// Color priority: filler > today > tagged > weekend > regular.
fn format_day(ctx: &GridContext, day: &Day, is_last: bool) -> String {
    let day_str = format!("{:>2}", day.number);

    let formatted = if !ctx.color {
        day_str
    } else if !day.in_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else if day.date == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if day.tag.is_some() {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if ctx.is_weekend(day.date.weekday()) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format month as grid of lines (header, weekday names, week rows).
pub fn format_month_grid(ctx: &GridContext, month: &Month) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + month.weeks.len());

    lines.push(format_month_header(
        month.year,
        month.month,
        month_width(ctx),
        ctx.color,
    ));
    lines.push(format_weekday_headers(ctx));

    for week in &month.weeks {
        let mut line = String::new();
        if ctx.week_numbers {
            match week.number {
                Some(n) => line.push_str(&format!("{:>2} ", n)),
                None => line.push_str("   "),
            }
        }
        for (i, day) in week.days.iter().enumerate() {
            line.push_str(&format_day(ctx, day, i + 1 == week.days.len()));
        }
        lines.push(line);
    }

    lines
}

/// Print multiple months side by side, padded to the tallest grid.
pub fn print_months_side_by_side(ctx: &GridContext, months: &[Month]) {
    let grids: Vec<Vec<String>> = months.iter().map(|m| format_month_grid(ctx, m)).collect();
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);
    let month_width = month_width(ctx);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, grid) in grids.iter().enumerate() {
            if row < grid.len() {
                let text = &grid[row];
                line.push_str(text);
                let padding = month_width.saturating_sub(text.width());
                for _ in 0..padding {
                    line.push(' ');
                }
            } else {
                for _ in 0..month_width {
                    line.push(' ');
                }
            }
            if i < grids.len() - 1 {
                for _ in 0..ctx.gutter_width {
                    line.push(' ');
                }
            }
        }
        println!("{}", line.trim_end());
    }
}

/// Print one planned page, with a navigation footer when more of the range
/// exists on either side.
pub fn print_plan(ctx: &GridContext, plan: &RangePlan, page_offset: i32, months_per_page: u32) {
    for chunk in plan.months.chunks(ctx.months_per_row() as usize) {
        print_months_side_by_side(ctx, chunk);
    }

    let mut nav = Vec::new();
    if plan.can_go_back {
        nav.push(format!(
            "earlier: --offset {}",
            previous_page_offset(page_offset, months_per_page)
        ));
    }
    if plan.can_go_forward {
        nav.push(format!(
            "later: --offset {}",
            next_page_offset(page_offset, months_per_page)
        ));
    }
    if !nav.is_empty() {
        println!("{}", nav.join("   "));
    }
}

impl GridContext {
    /// Months per output row, fixed or derived from terminal width.
    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                let width = month_width(self) + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
