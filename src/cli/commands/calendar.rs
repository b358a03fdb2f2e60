use crate::cli::parser::Commands;
use crate::cli::request::build_calendar;
use crate::config::Config;
use crate::core::calendar::ShiftCalendar;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, resolve_period, weekday_short};
use crate::utils::formatting::mins2readable;
use crate::utils::table::Table;
use chrono::{Datelike, Weekday};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        period,
        from,
        calendar,
    } = cmd
    {
        let dates = resolve_period(period.as_deref()).map_err(AppError::InvalidDate)?;
        let Some(&first) = dates.first() else {
            return Ok(());
        };

        let anchor = match from {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => first,
        };

        let cal_cfg = build_calendar(calendar, cfg, anchor)?;
        let shift_calendar = ShiftCalendar::new(&cal_cfg)?;

        let mut table = Table::with_headers(&[
            "Date", "Day", "Status", "Shift", "Windows", "Breaks", "Net",
        ]);
        let mut total = 0.0;
        let mut work_days = 0;

        for d in dates {
            let plan = shift_calendar.windows_for(d);
            let windows: Vec<String> = plan.windows.iter().map(|w| w.active.to_string()).collect();
            let breaks: Vec<String> = plan
                .windows
                .iter()
                .flat_map(|w| w.breaks.iter().map(|b| b.to_string()))
                .collect();
            let shift = match shift_calendar.shift_for(d) {
                Some(s) if plan.is_work_day && d.weekday() != Weekday::Sat => s.to_string(),
                _ => "-".to_string(),
            };

            if plan.is_work_day {
                work_days += 1;
                total += plan.available_minutes();
            }

            table.add_row(vec![
                d.to_string(),
                weekday_short(d),
                if plan.is_work_day { "work" } else { "closed" }.to_string(),
                shift,
                windows.join(" "),
                breaks.join(" "),
                mins2readable(plan.available_minutes(), true),
            ]);
        }

        print!("{}", table.render());
        println!(
            "\n{} work days, {} available",
            work_days,
            mins2readable(total, false)
        );
    }
    Ok(())
}
