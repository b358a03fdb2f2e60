use super::span::Span;
use serde::Serialize;

/// Work-permitted interval of one date, with the breaks nested inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftWindow {
    pub active: Span,
    pub breaks: Vec<Span>, // ordered by start, non-overlapping
}

impl ShiftWindow {
    pub fn new(active: Span, mut breaks: Vec<Span>) -> Self {
        breaks.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { active, breaks }
    }

    pub fn break_at(&self, minute: f64) -> Option<&Span> {
        self.breaks.iter().find(|b| b.contains(minute))
    }

    /// Start of the first break beginning strictly after `minute`.
    pub fn next_break_start(&self, minute: f64) -> Option<f64> {
        self.breaks
            .iter()
            .map(|b| b.start)
            .find(|&start| start > minute)
    }

    /// Net work minutes: window length minus breaks.
    pub fn available_minutes(&self) -> f64 {
        self.active.minutes() - self.breaks.iter().map(Span::minutes).sum::<f64>()
    }
}

/// Answer of the shift calendar for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub is_work_day: bool,
    pub windows: Vec<ShiftWindow>,
}

impl DayPlan {
    pub fn closed() -> Self {
        Self {
            is_work_day: false,
            windows: Vec::new(),
        }
    }

    pub fn open(windows: Vec<ShiftWindow>) -> Self {
        Self {
            is_work_day: true,
            windows,
        }
    }

    pub fn available_minutes(&self) -> f64 {
        self.windows.iter().map(ShiftWindow::available_minutes).sum()
    }
}
