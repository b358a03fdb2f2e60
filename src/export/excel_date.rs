// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Excel serial number (days since 1899-12-30, fraction = time of day).
pub(crate) fn to_excel_serial(dt: &NaiveDateTime) -> f64 {
    NaiveDate::from_ymd_opt(1899, 12, 30).map_or(0.0, |epoch| {
        let since = *dt - epoch.and_time(NaiveTime::MIN);
        since.num_milliseconds() as f64 / 86_400_000.0
    })
}
