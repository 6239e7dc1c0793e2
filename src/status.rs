//! Status aggregation: combines the individual rules into one report.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::dates::{age_in_years, days_between};
use crate::input::DriverInput;
use crate::rules::{
    self, AccompanimentStatus, full_accompaniment_end_date, new_driver_end_date,
    night_accompaniment_end_date,
};

/// Snapshot of a driver's regulatory status on `reference_date`.
///
/// Built fresh on every evaluation; end dates depend only on the input dates,
/// while flags, remaining days and progress depend on `reference_date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStatusReport {
    pub reference_date: NaiveDate,
    pub age: i32,
    pub is_new_driver: bool,
    pub is_young_driver: bool,
    pub was_young_when_licensed: bool,
    pub accompaniment_status: AccompanimentStatus,
    pub has_passenger_limit: bool,
    pub passenger_limit: Option<u8>,
    pub new_driver_end_date: NaiveDate,
    pub full_accompaniment_end_date: Option<NaiveDate>,
    pub night_accompaniment_end_date: Option<NaiveDate>,
    pub days_remaining_new_driver: u64,
    pub days_remaining_full_accompaniment: u64,
    pub days_remaining_night_accompaniment: u64,
    pub new_driver_progress: f64,
    pub full_accompaniment_progress: f64,
    pub night_accompaniment_progress: f64,
}

/// Whole days left until `end_date`, never negative.
pub fn days_remaining(end_date: NaiveDate, reference: NaiveDate) -> u64 {
    days_between(reference, end_date).max(0).unsigned_abs()
}

/// Elapsed share of `[start, end)` in percent, clamped to `[0, 100]`.
/// A zero-length or inverted interval counts as complete.
pub fn progress_percentage(start: NaiveDate, end: NaiveDate, reference: NaiveDate) -> f64 {
    let total = days_between(start, end);
    if total <= 0 {
        return 100.0;
    }

    let elapsed = days_between(start, reference);
    (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

impl DriverInput {
    /// Evaluate every rule against one reference date.
    pub fn status_at(&self, reference: NaiveDate) -> DriverStatusReport {
        let birth = self.birth_date;
        let license = self.license_date;

        let was_young = rules::was_young_when_licensed(birth, license);
        let passenger_limit = rules::passenger_limit(birth, license, reference);

        let new_driver_end = new_driver_end_date(license);
        let full_end = was_young.then(|| full_accompaniment_end_date(license));
        let night_end = was_young.then(|| night_accompaniment_end_date(license));

        let remaining = |end: Option<NaiveDate>| end.map_or(0, |e| days_remaining(e, reference));

        DriverStatusReport {
            reference_date: reference,
            age: age_in_years(birth, reference),
            is_new_driver: rules::is_new_driver(license, reference),
            is_young_driver: rules::is_young_driver(birth, reference),
            was_young_when_licensed: was_young,
            accompaniment_status: rules::accompaniment_status(birth, license, reference),
            has_passenger_limit: passenger_limit.is_some(),
            passenger_limit,
            new_driver_end_date: new_driver_end,
            full_accompaniment_end_date: full_end,
            night_accompaniment_end_date: night_end,
            days_remaining_new_driver: days_remaining(new_driver_end, reference),
            days_remaining_full_accompaniment: remaining(full_end),
            days_remaining_night_accompaniment: remaining(night_end),
            new_driver_progress: progress_percentage(license, new_driver_end, reference),
            full_accompaniment_progress: full_end
                .map_or(100.0, |end| progress_percentage(license, end, reference)),
            // night progress covers only the second sub-period, from full end to night end
            night_accompaniment_progress: match (full_end, night_end) {
                (Some(start), Some(end)) => progress_percentage(start, end, reference),
                _ => 100.0,
            },
        }
    }
}

/// Compute a driver's status from textual dates.
///
/// `reference_date` defaults to today's local date, captured once. Returns
/// `None` when either date is missing or not a valid calendar date.
pub fn compute_status(
    birth_date: &str,
    license_date: &str,
    reference_date: Option<NaiveDate>,
) -> Option<DriverStatusReport> {
    let input = match DriverInput::parse(Some(birth_date), Some(license_date)) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("No status computed: {e}");
            return None;
        }
    };

    let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
    tracing::trace!(%reference, "Computing driver status");
    Some(input.status_at(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_remaining_never_negative() {
        assert_eq!(days_remaining(d(2024, 7, 1), d(2024, 6, 15)), 16);
        assert_eq!(days_remaining(d(2024, 7, 1), d(2024, 7, 1)), 0);
        assert_eq!(days_remaining(d(2024, 7, 1), d(2025, 7, 1)), 0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let start = d(2024, 1, 1);
        let end = d(2024, 1, 11);
        assert_eq!(progress_percentage(start, end, d(2023, 12, 1)), 0.0);
        assert_eq!(progress_percentage(start, end, d(2024, 1, 6)), 50.0);
        assert_eq!(progress_percentage(start, end, d(2024, 1, 11)), 100.0);
        assert_eq!(progress_percentage(start, end, d(2030, 1, 1)), 100.0);
    }

    #[test]
    fn test_progress_degenerate_interval_is_complete() {
        let day = d(2024, 1, 1);
        assert_eq!(progress_percentage(day, day, d(2020, 1, 1)), 100.0);
        assert_eq!(progress_percentage(d(2024, 2, 1), day, d(2020, 1, 1)), 100.0);
    }

    #[test]
    fn test_night_progress_starts_at_full_end() {
        let input = DriverInput::new(d(2006, 1, 1), d(2024, 1, 1));
        let during_full = input.status_at(d(2024, 2, 15));
        assert_eq!(during_full.night_accompaniment_progress, 0.0);
        assert!(during_full.full_accompaniment_progress > 0.0);

        let report = input.status_at(d(2024, 4, 1));
        assert_eq!(report.accompaniment_status, AccompanimentStatus::Night);
        assert_eq!(report.full_accompaniment_progress, 100.0);
        assert_eq!(report.night_accompaniment_progress, 0.0);
    }

    #[test]
    fn test_exempt_driver_has_no_escort_dates() {
        let report = DriverInput::new(d(1990, 1, 1), d(2024, 5, 1)).status_at(d(2024, 6, 15));
        assert!(!report.was_young_when_licensed);
        assert_eq!(report.full_accompaniment_end_date, None);
        assert_eq!(report.night_accompaniment_end_date, None);
        assert_eq!(report.days_remaining_full_accompaniment, 0);
        assert_eq!(report.days_remaining_night_accompaniment, 0);
        assert_eq!(report.full_accompaniment_progress, 100.0);
        assert_eq!(report.night_accompaniment_progress, 100.0);
    }

    #[test]
    fn test_compute_status_absent_on_bad_input() {
        let today = Some(d(2024, 6, 15));
        assert!(compute_status("", "2023-01-01", today).is_none());
        assert!(compute_status("2005-01-01", "not a date", today).is_none());
        assert!(compute_status("2005-13-01", "2023-01-01", today).is_none());
    }

    #[test]
    fn test_compute_status_defaults_to_today() {
        let report = compute_status("2005-01-01", "2023-01-01", None).unwrap();
        let today = Local::now().date_naive();
        // the clock may roll over between the two reads
        assert!(report.reference_date == today || report.reference_date.succ_opt() == Some(today));
    }

    #[test]
    fn test_report_serializes_plain_data() {
        let report = compute_status("2004-01-01", "2024-04-01", Some(d(2024, 6, 15))).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["accompaniment_status"], "full");
        assert_eq!(json["full_accompaniment_end_date"], "2024-07-01");
        assert_eq!(json["passenger_limit"], 2);
    }
}
