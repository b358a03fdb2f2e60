//! Per-day aggregation of a projection's block log.

use crate::models::{BlockKind, DaySummary, ProjectionResult};

/// One entry per calendar day that has at least one block, in date order.
pub fn summarize_days(result: &ProjectionResult) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();

    for block in &result.blocks {
        if days.last().map(|d| d.day) != Some(block.day) {
            days.push(DaySummary {
                day: block.day,
                setup_minutes: 0.0,
                production_minutes: 0.0,
                break_minutes: 0.0,
                first_start: block.start_minute,
                last_end: block.start_minute,
                blocks: 0,
            });
        }
        let Some(entry) = days.last_mut() else {
            continue;
        };

        match block.kind {
            BlockKind::Setup => entry.setup_minutes += block.duration_minutes,
            BlockKind::Production => entry.production_minutes += block.duration_minutes,
            BlockKind::Break => entry.break_minutes += block.duration_minutes,
        }
        entry.last_end = entry.last_end.max(block.end_minute());
        entry.blocks += 1;
    }

    days
}
