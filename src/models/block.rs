use crate::utils::time::{at_minute, format_minute_of_day};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Setup,
    Production,
    Break,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Setup => "setup",
            BlockKind::Production => "production",
            BlockKind::Break => "break",
        }
    }

    pub fn is_work(&self) -> bool {
        !matches!(self, BlockKind::Break)
    }
}

/// One contiguous sub-interval of a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkBlock {
    pub day: NaiveDate,
    pub start_minute: f64, // minutes since midnight of `day`
    pub duration_minutes: f64,
    pub kind: BlockKind,
}

impl WorkBlock {
    pub fn end_minute(&self) -> f64 {
        self.start_minute + self.duration_minutes
    }

    pub fn start(&self) -> NaiveDateTime {
        at_minute(self.day, self.start_minute)
    }

    pub fn end(&self) -> NaiveDateTime {
        at_minute(self.day, self.end_minute())
    }

    pub fn start_str(&self) -> String {
        format_minute_of_day(self.start_minute)
    }

    pub fn end_str(&self) -> String {
        format_minute_of_day(self.end_minute())
    }
}
