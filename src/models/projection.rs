use super::block::{BlockKind, WorkBlock};
use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// End of the last non-break block (the request start when nothing was scheduled).
    pub completion: NaiveDateTime,
    pub blocks: Vec<WorkBlock>,
}

impl ProjectionResult {
    pub fn minutes_of(&self, kind: BlockKind) -> f64 {
        self.blocks
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.duration_minutes)
            .sum()
    }

    pub fn work_minutes(&self) -> f64 {
        self.blocks
            .iter()
            .filter(|b| b.kind.is_work())
            .map(|b| b.duration_minutes)
            .sum()
    }

    pub fn finishes_on_saturday(&self) -> bool {
        self.completion.weekday() == Weekday::Sat
    }
}
