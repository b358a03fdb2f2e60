use crate::cli::parser::Commands;
use crate::cli::request::build_request;
use crate::config::Config;
use crate::core::logic::{Core, PlanReport};
use crate::errors::AppResult;
use crate::models::WorkRequest;
use crate::ui::messages::{header, success, warning};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{hours_readable, mins2readable};
use crate::utils::table::Table;
use crate::utils::time::{format_minute_of_day, format_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { request, blocks } = cmd {
        let req = build_request(request, cfg)?;
        let report = Core::build_plan(&req, cfg.projection_options())?;

        print_request(&req);
        print_outcome(&req, &report);

        if !report.days.is_empty() {
            print_days(&report);
        }
        if *blocks {
            print_blocks(&report);
        }
    }
    Ok(())
}

fn print_request(req: &WorkRequest) {
    header("Work order");
    println!(
        "Start       : {} ({})",
        format_timestamp(&req.start),
        weekday_short(req.start.date())
    );
    println!("Setup       : {}", mins2readable(req.setup_minutes, false));
    println!("Production  : {}", mins2readable(req.production_minutes, false));

    let cal = &req.calendar;
    let rotation = if cal.alternate_weeks && cal.coverage.single_shift().is_some() {
        " (alternating weekly)"
    } else {
        ""
    };
    println!("Coverage    : {}{}", cal.coverage, rotation);
    println!(
        "Saturday    : {}",
        if cal.work_saturday { "working" } else { "off" }
    );
    if !cal.holidays.is_empty() {
        let list: Vec<String> = cal.holidays.iter().map(|d| d.to_string()).collect();
        println!("Holidays    : {}", list.join(", "));
    }
}

fn print_outcome(req: &WorkRequest, report: &PlanReport) {
    println!(
        "Total work  : {} ({})",
        hours_readable(req.total_minutes()),
        mins2readable(req.total_minutes(), false)
    );
    println!();

    let completion = report.result.completion;
    success(format!(
        "Estimated completion: {} ({})",
        format_timestamp(&completion),
        weekday_short(completion.date())
    ));

    if report.result.finishes_on_saturday() {
        warning("The work order finishes on a Saturday.");
    }
}

fn print_days(report: &PlanReport) {
    println!();
    let mut table = Table::with_headers(&[
        "Date", "Day", "From", "To", "Setup", "Production", "Breaks", "Work",
    ]);

    for d in &report.days {
        table.add_row(vec![
            d.day.to_string(),
            weekday_short(d.day),
            format_minute_of_day(d.first_start),
            format_minute_of_day(d.last_end),
            mins2readable(d.setup_minutes, true),
            mins2readable(d.production_minutes, true),
            mins2readable(d.break_minutes, true),
            mins2readable(d.work_minutes(), true),
        ]);
    }

    print!("{}", table.render());
}

fn print_blocks(report: &PlanReport) {
    println!();
    let mut table = Table::with_headers(&["Date", "Start", "End", "Kind", "Minutes"]);

    for b in &report.result.blocks {
        table.add_row(vec![
            b.day.to_string(),
            b.start_str(),
            b.end_str(),
            b.kind.as_str().to_string(),
            format!("{:.2}", b.duration_minutes),
        ]);
    }

    print!("{}", table.render());
}
