use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_minute_of_day, parse_minute_of_day};
use serde::Serialize;
use std::fmt;

/// Half-open time-of-day interval `[start, end)`, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Build from whole hours/minutes, e.g. `Span::hm((6, 0), (13, 50))`.
    pub const fn hm(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: (start.0 * 60 + start.1) as f64,
            end: (end.0 * 60 + end.1) as f64,
        }
    }

    /// Parse `HH:MM-HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidTime(format!("expected HH:MM-HH:MM, got '{s}'")))?;
        let start = parse_minute_of_day(a).ok_or_else(|| AppError::InvalidTime(a.to_string()))?;
        let end = parse_minute_of_day(b).ok_or_else(|| AppError::InvalidTime(b.to_string()))?;
        Ok(Self { start, end })
    }

    pub fn minutes(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, minute: f64) -> bool {
        self.start <= minute && minute < self.end
    }

    pub fn within(&self, outer: &Span) -> bool {
        outer.start <= self.start && self.end <= outer.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minute_of_day(self.start),
            format_minute_of_day(self.end)
        )
    }
}
