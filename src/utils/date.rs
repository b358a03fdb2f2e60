use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Expand a period into its dates.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

/// `start:end`, both sides in any format accepted by [`generate_from_period`].
pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let (Some(&start_date), Some(&end_date)) = (s.first(), e.last()) else {
        return Err(format!("Invalid range: {}:{}", start, end));
    };
    if start_date > end_date {
        return Err(format!("Range start {} is after end {}", start_date, end_date));
    }

    Ok(start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .collect())
}

/// Resolve `--period`: single period or `start:end`; default is the current month.
pub fn resolve_period(period: Option<&str>) -> Result<Vec<NaiveDate>, String> {
    match period {
        Some(p) => match p.split_once(':') {
            Some((start, end)) => generate_range(start, end),
            None => generate_from_period(p),
        },
        None => {
            let t = today();
            Ok(all_days_of_month(t.year(), t.month()))
        }
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .collect()
        })
        .unwrap_or_default()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|first| first.iter_days().take_while(|d| d.year() == year).collect())
        .unwrap_or_default()
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
