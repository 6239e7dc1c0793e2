//! Rule evaluators. Each rule is a pure function of the input dates, the
//! reference date and the constants in [`crate::policy`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{add_months, add_years, age_in_years, is_before};
use crate::policy::{
    FULL_ACCOMPANIMENT_MONTHS, MAX_PASSENGERS_WITH_LIMIT, NEW_DRIVER_PERIOD_YEARS,
    PASSENGER_LIMIT_AGE, TOTAL_ACCOMPANIMENT_MONTHS, YOUNG_DRIVER_AGE,
};

/// Escort mode currently owed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccompanimentStatus {
    /// Escort required at all hours.
    Full,
    /// Escort required during night hours only.
    Night,
    /// No escort required.
    None,
}

impl AccompanimentStatus {
    pub fn is_required(self) -> bool {
        !matches!(self, AccompanimentStatus::None)
    }

    pub fn label(self) -> &'static str {
        match self {
            AccompanimentStatus::Full => "full",
            AccompanimentStatus::Night => "night",
            AccompanimentStatus::None => "none",
        }
    }
}

pub fn new_driver_end_date(license_date: NaiveDate) -> NaiveDate {
    add_years(license_date, NEW_DRIVER_PERIOD_YEARS)
}

pub fn full_accompaniment_end_date(license_date: NaiveDate) -> NaiveDate {
    add_months(license_date, FULL_ACCOMPANIMENT_MONTHS)
}

pub fn night_accompaniment_end_date(license_date: NaiveDate) -> NaiveDate {
    add_months(license_date, TOTAL_ACCOMPANIMENT_MONTHS)
}

/// New-driver until the end date; the end date itself no longer counts.
pub fn is_new_driver(license_date: NaiveDate, reference: NaiveDate) -> bool {
    is_before(reference, new_driver_end_date(license_date))
}

pub fn is_young_driver(birth_date: NaiveDate, reference: NaiveDate) -> bool {
    age_in_years(birth_date, reference) < YOUNG_DRIVER_AGE
}

/// Licensed under the young-driver age. Drivers licensed at 24 or older never
/// owe an escort, whatever their current age.
pub fn was_young_when_licensed(birth_date: NaiveDate, license_date: NaiveDate) -> bool {
    age_in_years(birth_date, license_date) < YOUNG_DRIVER_AGE
}

pub fn accompaniment_status(
    birth_date: NaiveDate,
    license_date: NaiveDate,
    reference: NaiveDate,
) -> AccompanimentStatus {
    if !was_young_when_licensed(birth_date, license_date) {
        return AccompanimentStatus::None;
    }

    if is_before(reference, full_accompaniment_end_date(license_date)) {
        AccompanimentStatus::Full
    } else if is_before(reference, night_accompaniment_end_date(license_date)) {
        AccompanimentStatus::Night
    } else {
        AccompanimentStatus::None
    }
}

/// Maximum passengers allowed, or `None` when unrestricted.
pub fn passenger_limit(
    birth_date: NaiveDate,
    license_date: NaiveDate,
    reference: NaiveDate,
) -> Option<u8> {
    let under_age = age_in_years(birth_date, reference) < PASSENGER_LIMIT_AGE;
    (is_new_driver(license_date, reference) && under_age).then_some(MAX_PASSENGERS_WITH_LIMIT)
}
