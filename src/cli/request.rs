//! Turns parsed CLI arguments plus the loaded configuration into the
//! immutable inputs of the projection engine.

use crate::cli::parser::{CalendarArgs, RequestArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarConfig, Coverage, WorkRequest};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

pub fn build_calendar(
    args: &CalendarArgs,
    cfg: &Config,
    rotation_anchor: NaiveDate,
) -> AppResult<CalendarConfig> {
    let coverage = match &args.coverage {
        Some(code) => Coverage::from_code(code).ok_or_else(|| {
            AppError::invalid_request(
                "coverage",
                format!("unknown coverage '{code}' (use continuous, morning or afternoon)"),
            )
        })?,
        None => cfg.coverage()?,
    };

    let mut holidays = cfg.holiday_dates()?;
    for h in &args.holidays {
        holidays.push(parse_date(h).ok_or_else(|| AppError::InvalidDate(h.to_string()))?);
    }

    Ok(CalendarConfig::new(coverage, rotation_anchor)
        .with_hours(cfg.shift_hours()?)
        .with_saturday(saturday_override(args).unwrap_or(cfg.work_saturday))
        .with_alternating_weeks(args.alternate)
        .with_holidays(holidays))
}

/// `Some` when a Saturday flag was given on the command line.
fn saturday_override(args: &CalendarArgs) -> Option<bool> {
    match (args.saturday, args.no_saturday) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub fn build_request(args: &RequestArgs, cfg: &Config) -> AppResult<WorkRequest> {
    let date = parse_date(&args.date).ok_or_else(|| AppError::InvalidDate(args.date.clone()))?;
    let time = parse_time(&args.at).ok_or_else(|| AppError::InvalidTime(args.at.clone()))?;

    let setup_minutes = match (args.setup, args.setup_hours) {
        (Some(minutes), _) => minutes,
        (None, Some(hours)) => hours * 60.0,
        (None, None) => 0.0,
    };

    let start = date.and_time(time);
    let calendar = build_calendar(&args.calendar, cfg, date)?;

    let request = match (args.production, args.pieces, args.piece_minutes) {
        (None, Some(pieces), Some(per_piece)) => {
            WorkRequest::from_pieces(start, setup_minutes, pieces, per_piece, calendar)
        }
        (production, _, _) => {
            WorkRequest::new(start, setup_minutes, production.unwrap_or(0.0), calendar)
        }
    };

    Ok(request)
}
