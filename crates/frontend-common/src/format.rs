//! Display formatting for dates and amounts

use chrono::NaiveDate;

/// Placeholder shown for a missing date
pub const EMPTY_DATE: &str = "-";

/// Shown when a date cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO `YYYY-MM-DD` date as `Jun 15, 2026`
///
/// The date is a calendar day, so no timezone shift applies.
pub fn format_date(date: Option<&str>) -> String {
    match date {
        None | Some("") => EMPTY_DATE.to_string(),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| INVALID_DATE.to_string()),
    }
}

/// Format an amount as dollars with two decimals, e.g. `$123.45`
pub fn format_currency(amount: f64) -> String {
    if amount.is_infinite() {
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        return format!("${sign}Infinity");
    }
    // -0.0 prints as "0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("${amount:.2}")
}
