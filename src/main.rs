//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid                               // Current month
//! calgrid 2026-03-15                    // March 2026
//! calgrid 2026-01-01 2026-12-31         // First page of 2026
//! calgrid 2026-01-01 2026-12-31 -o 6    // Second page
//! ```

use calgrid::args::{Args, get_display_range, get_highlight};
use calgrid::date::CalendarDate;
use calgrid::formatter::print_plan;
use calgrid::planner::plan_range;
use calgrid::types::{GridContext, TagFn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = GridContext::new(args)?;
    let (start, end) = get_display_range(args)?;
    let highlight = get_highlight(args)?;

    let tag = highlight.map(|(from, to)| {
        move |date: CalendarDate| (from <= date && date <= to).then(|| String::from("highlight"))
    });
    let tag_ref: Option<&TagFn> = tag.as_ref().map(|hook| hook as &TagFn);

    let plan = plan_range(&ctx, start, end, args.months_per_page, args.offset, tag_ref)
        .map_err(|e| e.to_string())?;

    print_plan(&ctx, &plan, args.offset, args.months_per_page);
    Ok(())
}
