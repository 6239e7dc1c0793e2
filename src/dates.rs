//! dates.rs
//!
//! Calendar-date arithmetic used by the status rules. Everything here works on
//! `NaiveDate`, so time-of-day and timezone never leak into a day count.
//!
//! Month and year addition follow chrono's `Months` semantics: when the
//! day-of-month does not exist in the target month the result is the last day
//! of that month (Jan 31 + 1 month = Feb 28/29, Feb 29 + 1 year = Feb 28).
//! Results saturate at `NaiveDate::MIN`/`MAX` instead of failing.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::error::{Result, StatusError};

/// Whole completed years from `from` to `reference`.
///
/// Negative when `reference` precedes `from`, truncated toward zero. A 29 Feb
/// start date completes its year on 1 March in common years.
pub fn age_in_years(from: NaiveDate, reference: NaiveDate) -> i32 {
    if reference < from {
        return -age_in_years(reference, from);
    }

    let mut years = reference.year() - from.year();
    if (reference.month(), reference.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Signed day count `b - a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years.saturating_mul(12))
}

pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

/// Parse a calendar date given as `yyyy-mm-dd`, or as an ISO datetime whose
/// date part is kept.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StatusError::MissingDate {
            field: field.to_string(),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.date());
        }
    }

    Err(StatusError::InvalidDate {
        field: field.to_string(),
        value: trimmed.to_string(),
        reason: "expected a calendar date such as 2024-06-15".to_string(),
    })
}

/// Calendar-aware age split into years, months and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Years, months and days elapsed from `from` to `reference`.
///
/// Months borrow from years and days borrow from the preceding month, so
/// varying month lengths and leap years are respected. All zero when
/// `reference` precedes `from`.
pub fn age_breakdown(from: NaiveDate, reference: NaiveDate) -> AgeBreakdown {
    if reference < from {
        return AgeBreakdown::default();
    }

    let years = age_in_years(from, reference);
    let anchor = add_years(from, years);

    let mut months = (reference.year() - anchor.year()) * 12 + reference.month() as i32
        - anchor.month() as i32;
    months = months.clamp(0, 11);
    while months > 0 && add_months(anchor, months) > reference {
        months -= 1;
    }

    let days = days_between(add_months(anchor, months), reference).max(0);

    AgeBreakdown {
        years: years.unsigned_abs(),
        months: months.unsigned_abs(),
        days: u32::try_from(days).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_counts_completed_years() {
        assert_eq!(age_in_years(d(2005, 1, 1), d(2024, 6, 15)), 19);
        assert_eq!(age_in_years(d(2000, 6, 15), d(2024, 6, 14)), 23);
        assert_eq!(age_in_years(d(2000, 6, 15), d(2024, 6, 15)), 24);
    }

    #[test]
    fn test_age_before_start_is_negative_not_a_panic() {
        assert_eq!(age_in_years(d(2024, 6, 15), d(2020, 6, 15)), -4);
        assert_eq!(age_in_years(d(2000, 6, 15), d(2000, 1, 1)), 0);
    }

    #[test]
    fn test_leap_day_birthday_completes_on_march_first() {
        let born = d(2004, 2, 29);
        assert_eq!(age_in_years(born, d(2005, 2, 28)), 0);
        assert_eq!(age_in_years(born, d(2005, 3, 1)), 1);
        assert_eq!(age_in_years(born, d(2008, 2, 29)), 4);
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(d(2024, 6, 15), d(2024, 7, 1)), 16);
        assert_eq!(days_between(d(2024, 7, 1), d(2024, 6, 15)), -16);
        assert_eq!(days_between(d(2024, 2, 28), d(2024, 3, 1)), 2);
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(d(2023, 11, 30), 3), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
        assert_eq!(add_months(d(2024, 8, 31), 6), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 3, 31), -1), d(2024, 2, 29));
    }

    #[test]
    fn test_add_years_from_leap_day() {
        assert_eq!(add_years(d(2024, 2, 29), 2), d(2026, 2, 28));
        assert_eq!(add_years(d(2024, 2, 29), 4), d(2028, 2, 29));
    }

    #[test]
    fn test_add_months_saturates() {
        assert_eq!(add_months(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_months(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn test_is_before_is_strict() {
        assert!(is_before(d(2024, 1, 1), d(2024, 1, 2)));
        assert!(!is_before(d(2024, 1, 2), d(2024, 1, 2)));
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse_date("birth date", "2005-01-01").unwrap(), d(2005, 1, 1));
        assert_eq!(parse_date("birth date", " 2005-01-01 ").unwrap(), d(2005, 1, 1));
        assert_eq!(
            parse_date("license date", "2023-01-01T10:30:00").unwrap(),
            d(2023, 1, 1)
        );
        assert_eq!(
            parse_date("license date", "2023-01-01T10:30").unwrap(),
            d(2023, 1, 1)
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        assert!(matches!(
            parse_date("birth date", "  "),
            Err(StatusError::MissingDate { .. })
        ));
        assert!(matches!(
            parse_date("birth date", "2023-02-30"),
            Err(StatusError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("birth date", "15/06/2024"),
            Err(StatusError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_age_breakdown_borrows_months_and_days() {
        assert_eq!(
            age_breakdown(d(2005, 1, 1), d(2024, 6, 15)),
            AgeBreakdown { years: 19, months: 5, days: 14 }
        );
        assert_eq!(
            age_breakdown(d(2000, 1, 31), d(2000, 3, 1)),
            AgeBreakdown { years: 0, months: 1, days: 1 }
        );
        assert_eq!(
            age_breakdown(d(1999, 12, 20), d(2000, 1, 5)),
            AgeBreakdown { years: 0, months: 0, days: 16 }
        );
    }

    #[test]
    fn test_age_breakdown_before_start_is_zero() {
        assert_eq!(
            age_breakdown(d(2024, 1, 1), d(2023, 1, 1)),
            AgeBreakdown::default()
        );
    }
}
