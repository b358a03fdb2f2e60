// src/export/model.rs

use crate::core::logic::PlanReport;
use crate::models::{DaySummary, WorkBlock};
use crate::utils::time::format_minute_of_day;
use serde::Serialize;

/// Flat row per block, the shape Gantt tools import.
#[derive(Serialize, Clone, Debug)]
pub struct BlockExport {
    pub day: String,
    pub weekday: String,
    pub start: String,
    pub end: String,
    pub kind: String,
    pub duration_minutes: f64,
}

impl From<&WorkBlock> for BlockExport {
    fn from(b: &WorkBlock) -> Self {
        Self {
            day: b.day.format("%Y-%m-%d").to_string(),
            weekday: b.day.format("%a").to_string(),
            start: b.start().format("%Y-%m-%d %H:%M:%S").to_string(),
            end: b.end().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: b.kind.as_str().to_string(),
            duration_minutes: b.duration_minutes,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub day: String,
    pub first_start: String,
    pub last_end: String,
    pub setup_minutes: f64,
    pub production_minutes: f64,
    pub break_minutes: f64,
}

impl From<&DaySummary> for DayExport {
    fn from(d: &DaySummary) -> Self {
        Self {
            day: d.day.format("%Y-%m-%d").to_string(),
            first_start: format_minute_of_day(d.first_start),
            last_end: format_minute_of_day(d.last_end),
            setup_minutes: d.setup_minutes,
            production_minutes: d.production_minutes,
            break_minutes: d.break_minutes,
        }
    }
}

/// Whole projection as written to JSON.
#[derive(Serialize, Clone, Debug)]
pub struct PlanExport {
    pub completion: String,
    pub work_minutes: f64,
    pub blocks: Vec<BlockExport>,
    pub days: Vec<DayExport>,
}

impl From<&PlanReport> for PlanExport {
    fn from(report: &PlanReport) -> Self {
        Self {
            completion: report.result.completion.format("%Y-%m-%d %H:%M:%S").to_string(),
            work_minutes: report.result.work_minutes(),
            blocks: report.result.blocks.iter().map(BlockExport::from).collect(),
            days: report.days.iter().map(DayExport::from).collect(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "day",
        "weekday",
        "start",
        "end",
        "kind",
        "duration_minutes",
    ]
}
