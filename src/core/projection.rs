//! Projection engine: walks calendar time from the request start, spending
//! setup minutes and then production minutes inside the shift windows, and
//! logs every traversed sub-interval as a [`WorkBlock`].

use crate::core::calendar::ShiftCalendar;
use crate::errors::{AppError, AppResult};
use crate::models::{BlockKind, ProjectionResult, ShiftWindow, WorkBlock, WorkRequest};
use crate::utils::time::{at_minute, minute_of_day};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

pub const DEFAULT_MAX_DAY_ADVANCES: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// Upper bound on consecutive moves to a following date without any
    /// work being scheduled.
    pub max_day_advances: u32,
    /// Reject single-shift requests starting outside the assigned shift.
    pub strict_shift_start: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            max_day_advances: DEFAULT_MAX_DAY_ADVANCES,
            strict_shift_start: false,
        }
    }
}

/// Stateless engine; every call to [`Projector::project`] is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    options: ProjectionOptions,
}

impl Projector {
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    #[instrument(skip(self, request), fields(
        start = %request.start,
        setup = request.setup_minutes,
        production = request.production_minutes,
        coverage = %request.calendar.coverage
    ))]
    pub fn project(&self, request: &WorkRequest) -> AppResult<ProjectionResult> {
        let calendar = ShiftCalendar::new(&request.calendar)?;
        self.validate(request, &calendar)?;

        if request.is_empty() {
            debug!("empty request, nothing to schedule");
            return Ok(ProjectionResult {
                completion: request.start,
                blocks: Vec::new(),
            });
        }

        let mut walk = Walk::new(request);
        let mut day = request.start.date();
        let mut cursor = minute_of_day(request.start.time());
        let mut advances: u32 = 0;

        loop {
            let plan = calendar.windows_for(day);
            let remaining_before = walk.remaining();

            if plan.is_work_day {
                for window in &plan.windows {
                    if walk.is_done() {
                        break;
                    }
                    if cursor >= window.active.end {
                        continue;
                    }
                    // idle time before the window is skipped, never logged
                    cursor = cursor.max(window.active.start);
                    cursor = walk.fill_window(day, cursor, window);
                }
            }

            if walk.is_done() {
                break;
            }

            // only consecutive days without progress count towards the bound
            if walk.remaining() < remaining_before {
                advances = 0;
            }
            if advances >= self.options.max_day_advances {
                return Err(AppError::ScheduleUnreachable {
                    advances,
                    last_date: day,
                });
            }
            advances += 1;

            day = day.succ_opt().ok_or(AppError::ScheduleUnreachable {
                advances,
                last_date: day,
            })?;
            cursor = calendar.day_start();
            debug!(%day, advances, remaining = walk.remaining(), "moving to next day");
        }

        let result = walk.finish(request.start);
        debug!(completion = %result.completion, blocks = result.blocks.len(), "projection completed");
        Ok(result)
    }

    fn validate(&self, request: &WorkRequest, calendar: &ShiftCalendar) -> AppResult<()> {
        check_minutes("setup_minutes", request.setup_minutes)?;
        check_minutes("production_minutes", request.production_minutes)?;

        let date = request.start.date();
        let weekday = !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

        if self.options.strict_shift_start
            && weekday
            && let Some(shift) = calendar.shift_for(date)
        {
            let bounds = request.calendar.hours.shift(shift);
            let at = minute_of_day(request.start.time());
            if !bounds.contains(at) {
                return Err(AppError::invalid_request(
                    "start",
                    format!(
                        "{} is outside the {} shift ({})",
                        request.start.format("%Y-%m-%d %H:%M"),
                        shift,
                        bounds
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn check_minutes(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_request(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(AppError::invalid_request(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

/// Mutable state of one projection.
struct Walk {
    setup: f64,
    production: f64,
    blocks: Vec<WorkBlock>,
    last_work_end: Option<(NaiveDate, f64)>,
}

impl Walk {
    fn new(request: &WorkRequest) -> Self {
        Self {
            setup: request.setup_minutes,
            production: request.production_minutes,
            blocks: Vec::new(),
            last_work_end: None,
        }
    }

    fn remaining(&self) -> f64 {
        self.setup + self.production
    }

    fn is_done(&self) -> bool {
        self.remaining() <= 0.0
    }

    /// Spend work inside `window` starting at `cursor`; returns the new cursor.
    fn fill_window(&mut self, day: NaiveDate, mut cursor: f64, window: &ShiftWindow) -> f64 {
        let end = window.active.end;

        while cursor < end && !self.is_done() {
            if let Some(brk) = window.break_at(cursor) {
                let brk_end = brk.end.min(end);
                self.push(day, cursor, brk_end - cursor, BlockKind::Break);
                cursor = brk_end;
                continue;
            }

            let boundary = window
                .next_break_start(cursor)
                .map_or(end, |start| start.min(end));
            let span = boundary - cursor;

            let kind = if self.setup > 0.0 {
                BlockKind::Setup
            } else {
                BlockKind::Production
            };
            let left = match kind {
                BlockKind::Setup => &mut self.setup,
                _ => &mut self.production,
            };
            let spent = if *left >= span { span } else { *left };
            *left -= spent;

            self.push(day, cursor, spent, kind);

            // land exactly on the boundary so no sliver is left behind
            cursor = if spent == span { boundary } else { cursor + spent };
            self.last_work_end = Some((day, cursor));
        }

        cursor
    }

    fn push(&mut self, day: NaiveDate, start_minute: f64, duration_minutes: f64, kind: BlockKind) {
        trace!(%day, start_minute, duration_minutes, kind = kind.as_str(), "block");
        self.blocks.push(WorkBlock {
            day,
            start_minute,
            duration_minutes,
            kind,
        });
    }

    fn finish(self, start: chrono::NaiveDateTime) -> ProjectionResult {
        let completion = self
            .last_work_end
            .map_or(start, |(day, minute)| at_minute(day, minute));

        ProjectionResult {
            completion,
            blocks: self.blocks,
        }
    }
}
