//! Shift calendar: which dates are work days, and what the working windows
//! and breaks of each work day are.

use crate::errors::AppResult;
use crate::models::{CalendarConfig, Coverage, DayPlan, Shift, ShiftWindow, Span};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct ShiftCalendar<'a> {
    config: &'a CalendarConfig,
}

impl<'a> ShiftCalendar<'a> {
    /// Fails with `InvalidRequest` when the configured hours are malformed.
    pub fn new(config: &'a CalendarConfig) -> AppResult<Self> {
        config.hours.validate()?;
        Ok(Self { config })
    }

    /// Work-day status and windows for `date`. Pure in `(date, config)`.
    pub fn windows_for(&self, date: NaiveDate) -> DayPlan {
        let hours = &self.config.hours;

        let plan = if self.config.holidays.contains(&date) {
            DayPlan::closed()
        } else {
            match date.weekday() {
                Weekday::Sun => DayPlan::closed(),
                Weekday::Sat if self.config.work_saturday => {
                    DayPlan::open(vec![ShiftWindow::new(hours.saturday, Vec::new())])
                }
                Weekday::Sat => DayPlan::closed(),
                _ => match self.shift_for(date) {
                    Some(shift) => DayPlan::open(vec![ShiftWindow::new(
                        hours.shift(shift),
                        vec![hours.shift_break(shift)],
                    )]),
                    None => DayPlan::open(self.continuous_windows()),
                },
            }
        };

        trace!(%date, work_day = plan.is_work_day, windows = plan.windows.len(), "calendar query");
        plan
    }

    /// Shift staffed on `date` in single-shift mode; `None` when continuous.
    pub fn shift_for(&self, date: NaiveDate) -> Option<Shift> {
        match self.config.coverage {
            Coverage::Continuous => None,
            Coverage::Single(start_shift) => {
                if self.config.alternate_weeks && self.weeks_elapsed(date).rem_euclid(2) == 1 {
                    Some(start_shift.opposite())
                } else {
                    Some(start_shift)
                }
            }
        }
    }

    /// Whole weeks between the Monday of the rotation anchor's week and the
    /// Monday of `date`'s week. Negative before the anchor.
    pub fn weeks_elapsed(&self, date: NaiveDate) -> i64 {
        (week_start(date) - week_start(self.config.rotation_anchor))
            .num_days()
            .div_euclid(7)
    }

    /// Net work minutes of `date` (windows minus breaks).
    pub fn available_minutes(&self, date: NaiveDate) -> f64 {
        self.windows_for(date).available_minutes()
    }

    pub fn day_start(&self) -> f64 {
        self.config.hours.day_start
    }

    fn continuous_windows(&self) -> Vec<ShiftWindow> {
        let h = &self.config.hours;

        // Back-to-back shifts merge; a gap between them keeps two windows.
        if h.morning.end == h.afternoon.start {
            vec![ShiftWindow::new(
                Span::new(h.morning.start, h.afternoon.end),
                vec![h.morning_break, h.afternoon_break],
            )]
        } else {
            vec![
                ShiftWindow::new(h.morning, vec![h.morning_break]),
                ShiftWindow::new(h.afternoon, vec![h.afternoon_break]),
            ]
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
