use chrono::NaiveDate;
use serde::Serialize;

/// Per-day totals of a projection, as shown in the `plan` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub setup_minutes: f64,
    pub production_minutes: f64,
    pub break_minutes: f64,
    pub first_start: f64, // minute of day
    pub last_end: f64,    // minute of day, breaks included
    pub blocks: usize,
}

impl DaySummary {
    pub fn work_minutes(&self) -> f64 {
        self.setup_minutes + self.production_minutes
    }
}
