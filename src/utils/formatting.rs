//! Formatting utilities used for CLI and export outputs.

/// Minutes as `02h 25m` (or `02:25` when `short`). Fractions are rounded.
pub fn mins2readable(mins: f64, short: bool) -> String {
    let total = mins.abs().round() as i64;
    let hours = total / 60;
    let minutes = total % 60;
    let sign = if mins < 0.0 && total > 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours with one decimal, e.g. `16.0 h`.
pub fn hours_readable(mins: f64) -> String {
    format!("{:.1} h", mins / 60.0)
}

