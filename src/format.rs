//! Human-readable strings for display. Lossy; never feed them back into rules.

use chrono::NaiveDate;

use crate::dates::AgeBreakdown;

/// Coarse phrase for a remaining day count.
pub fn format_days_remaining(days: u64) -> String {
    match days {
        0 => "ended".to_string(),
        1 => "one day".to_string(),
        2..30 => format!("{days} days"),
        30..60 => "about a month".to_string(),
        60..365 => format!("about {} months", rounded_div(days, 30)),
        365..730 => "about a year".to_string(),
        _ => format!("about {} years", rounded_div(days, 365)),
    }
}

fn rounded_div(n: u64, unit: u64) -> u64 {
    (n as f64 / unit as f64).round() as u64
}

/// Long-form date, e.g. "1 January 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// "X years, Y months, Z days" with singular units where the count is one.
pub fn format_age(age: &AgeBreakdown) -> String {
    format!(
        "{} year{}, {} month{}, {} day{}",
        age.years,
        plural(age.years),
        age.months,
        plural(age.months),
        age.days,
        plural(age.days)
    )
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
