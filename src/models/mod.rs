pub mod block;
pub mod calendar_config;
pub mod day_summary;
pub mod projection;
pub mod request;
pub mod shift;
pub mod span;
pub mod window;

pub use block::{BlockKind, WorkBlock};
pub use calendar_config::{CalendarConfig, ShiftHours};
pub use day_summary::DaySummary;
pub use projection::ProjectionResult;
pub use request::WorkRequest;
pub use shift::{Coverage, Shift};
pub use span::Span;
pub use window::{DayPlan, ShiftWindow};
