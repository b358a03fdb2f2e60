use crate::core::projection::{ProjectionOptions, Projector};
use crate::core::summary::summarize_days;
use crate::errors::AppResult;
use crate::models::{DaySummary, ProjectionResult, WorkRequest};

/// A projection together with its per-day totals.
#[derive(Debug, Clone)]
pub struct PlanReport {
    pub result: ProjectionResult,
    pub days: Vec<DaySummary>,
}

pub struct Core;

impl Core {
    pub fn build_plan(request: &WorkRequest, options: ProjectionOptions) -> AppResult<PlanReport> {
        let result = Projector::new(options).project(request)?;
        let days = summarize_days(&result);

        Ok(PlanReport { result, days })
    }
}
