use super::calendar_config::CalendarConfig;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One work order to project: setup first, then production.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkRequest {
    pub start: NaiveDateTime,
    pub setup_minutes: f64,
    pub production_minutes: f64,
    pub calendar: CalendarConfig,
}

impl WorkRequest {
    pub fn new(
        start: NaiveDateTime,
        setup_minutes: f64,
        production_minutes: f64,
        calendar: CalendarConfig,
    ) -> Self {
        Self {
            start,
            setup_minutes,
            production_minutes,
            calendar,
        }
    }

    /// Production expressed as `pieces × minutes_per_piece`.
    pub fn from_pieces(
        start: NaiveDateTime,
        setup_minutes: f64,
        pieces: u32,
        minutes_per_piece: f64,
        calendar: CalendarConfig,
    ) -> Self {
        Self::new(
            start,
            setup_minutes,
            pieces as f64 * minutes_per_piece,
            calendar,
        )
    }

    pub fn total_minutes(&self) -> f64 {
        self.setup_minutes + self.production_minutes
    }

    pub fn is_empty(&self) -> bool {
        self.setup_minutes == 0.0 && self.production_minutes == 0.0
    }
}
