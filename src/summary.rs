//! Views derived from a finished report: the list of restrictions currently in
//! force and a one-line shareable status message.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::format_days_remaining;
use crate::rules::AccompanimentStatus;
use crate::status::DriverStatusReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Restriction {
    NewDriver { ends: NaiveDate },
    FullAccompaniment { ends: NaiveDate },
    NightAccompaniment { ends: NaiveDate },
    PassengerLimit { max: u8 },
}

impl Restriction {
    pub fn describe(&self) -> String {
        match self {
            Restriction::NewDriver { .. } => {
                "New driver: display the new-driver sign".to_string()
            }
            Restriction::FullAccompaniment { .. } => {
                "Full escort: an accompanying driver is required at all hours".to_string()
            }
            Restriction::NightAccompaniment { .. } => {
                "Night escort: an accompanying driver is required at night".to_string()
            }
            Restriction::PassengerLimit { max } => {
                format!("Passenger limit: at most {max} passengers besides the escort")
            }
        }
    }
}

/// Restrictions in force on the report's reference date. Empty when none apply.
pub fn active_restrictions(report: &DriverStatusReport) -> Vec<Restriction> {
    let mut out = Vec::new();

    if report.is_new_driver {
        out.push(Restriction::NewDriver {
            ends: report.new_driver_end_date,
        });
    }

    match (
        report.accompaniment_status,
        report.full_accompaniment_end_date,
        report.night_accompaniment_end_date,
    ) {
        (AccompanimentStatus::Full, Some(ends), _) => {
            out.push(Restriction::FullAccompaniment { ends })
        }
        (AccompanimentStatus::Night, _, Some(ends)) => {
            out.push(Restriction::NightAccompaniment { ends })
        }
        _ => {}
    }

    if let Some(max) = report.passenger_limit {
        out.push(Restriction::PassengerLimit { max });
    }

    out
}

/// Short status line suitable for sharing.
pub fn share_message(report: &DriverStatusReport) -> String {
    match report.accompaniment_status {
        AccompanimentStatus::Full => format!(
            "{} left until my full escort period ends!",
            format_days_remaining(report.days_remaining_full_accompaniment)
        ),
        AccompanimentStatus::Night => format!(
            "{} left until my night escort period ends!",
            format_days_remaining(report.days_remaining_night_accompaniment)
        ),
        AccompanimentStatus::None if report.is_new_driver => format!(
            "{} left until my new-driver period ends!",
            format_days_remaining(report.days_remaining_new_driver)
        ),
        AccompanimentStatus::None => {
            "I've finished both the new-driver and escort periods!".to_string()
        }
    }
}
