use super::shift::{Coverage, Shift};
use super::span::Span;
use crate::errors::{AppError, AppResult};
use crate::utils::time::MINUTES_PER_DAY;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Time-of-day bounds of the plant's shifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftHours {
    pub morning: Span,
    pub morning_break: Span,
    pub afternoon: Span,
    pub afternoon_break: Span,
    pub saturday: Span,
    /// Minute of day the cursor jumps to when moving to a new date.
    pub day_start: f64,
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self {
            morning: Span::hm((6, 0), (13, 50)),
            morning_break: Span::hm((12, 0), (12, 20)),
            afternoon: Span::hm((13, 50), (21, 40)),
            afternoon_break: Span::hm((19, 30), (19, 50)),
            saturday: Span::hm((6, 0), (12, 0)),
            day_start: 6.0 * 60.0,
        }
    }
}

impl ShiftHours {
    pub fn shift(&self, shift: Shift) -> Span {
        match shift {
            Shift::Morning => self.morning,
            Shift::Afternoon => self.afternoon,
        }
    }

    pub fn shift_break(&self, shift: Shift) -> Span {
        match shift {
            Shift::Morning => self.morning_break,
            Shift::Afternoon => self.afternoon_break,
        }
    }

    /// Check window/break nesting. The error names the offending field.
    pub fn validate(&self) -> AppResult<()> {
        check_window("hours.morning_shift", &self.morning)?;
        check_window("hours.afternoon_shift", &self.afternoon)?;
        check_window("hours.saturday_shift", &self.saturday)?;
        check_break("hours.morning_break", &self.morning_break, &self.morning)?;
        check_break(
            "hours.afternoon_break",
            &self.afternoon_break,
            &self.afternoon,
        )?;

        if self.morning.end > self.afternoon.start {
            return Err(AppError::invalid_request(
                "hours.afternoon_shift",
                format!(
                    "afternoon shift {} starts before the morning shift {} ends",
                    self.afternoon, self.morning
                ),
            ));
        }

        if !(0.0..MINUTES_PER_DAY).contains(&self.day_start) {
            return Err(AppError::invalid_request(
                "hours.day_start",
                "day start must lie within 00:00-23:59",
            ));
        }

        Ok(())
    }
}

fn check_window(field: &str, w: &Span) -> AppResult<()> {
    if !(w.start.is_finite() && w.end.is_finite()) || w.start < 0.0 || w.end > MINUTES_PER_DAY {
        return Err(AppError::invalid_request(
            field,
            format!("window {w} must lie within 00:00-24:00"),
        ));
    }
    if w.start >= w.end {
        return Err(AppError::invalid_request(
            field,
            format!("window {w} is empty or reversed"),
        ));
    }
    Ok(())
}

fn check_break(field: &str, b: &Span, shift: &Span) -> AppResult<()> {
    if b.start >= b.end {
        return Err(AppError::invalid_request(
            field,
            format!("break {b} has no length"),
        ));
    }
    if !b.within(shift) {
        return Err(AppError::invalid_request(
            field,
            format!("break {b} is not inside shift {shift}"),
        ));
    }
    Ok(())
}

/// Every knob the shift calendar depends on, collected once by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarConfig {
    pub coverage: Coverage,
    /// Single-shift only: swap shifts every other week.
    pub alternate_weeks: bool,
    /// Week parity is counted from the week containing this date.
    pub rotation_anchor: NaiveDate,
    pub work_saturday: bool,
    pub holidays: BTreeSet<NaiveDate>,
    pub hours: ShiftHours,
}

impl CalendarConfig {
    pub fn new(coverage: Coverage, rotation_anchor: NaiveDate) -> Self {
        Self {
            coverage,
            alternate_weeks: false,
            rotation_anchor,
            work_saturday: false,
            holidays: BTreeSet::new(),
            hours: ShiftHours::default(),
        }
    }

    pub fn continuous(rotation_anchor: NaiveDate) -> Self {
        Self::new(Coverage::Continuous, rotation_anchor)
    }

    pub fn single(shift: Shift, rotation_anchor: NaiveDate) -> Self {
        Self::new(Coverage::Single(shift), rotation_anchor)
    }

    pub fn with_saturday(mut self, work_saturday: bool) -> Self {
        self.work_saturday = work_saturday;
        self
    }

    pub fn with_alternating_weeks(mut self, alternate: bool) -> Self {
        self.alternate_weeks = alternate;
        self
    }

    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    pub fn with_hours(mut self, hours: ShiftHours) -> Self {
        self.hours = hours;
        self
    }
}
