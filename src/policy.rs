//! Graduated-licensing policy constants.

use chrono::{NaiveTime, Timelike};

/// Length of the new-driver period, counted from the license date.
pub const NEW_DRIVER_PERIOD_YEARS: i32 = 2;

/// Full (all hours) escort period, counted from the license date.
pub const FULL_ACCOMPANIMENT_MONTHS: i32 = 3;

/// Night-only escort period that follows the full one.
pub const NIGHT_ACCOMPANIMENT_MONTHS: i32 = 3;

/// End of the whole escort obligation, counted from the license date.
pub const TOTAL_ACCOMPANIMENT_MONTHS: i32 = FULL_ACCOMPANIMENT_MONTHS + NIGHT_ACCOMPANIMENT_MONTHS;

/// Exclusive upper bound on age for a "young driver".
pub const YOUNG_DRIVER_AGE: i32 = 24;

/// Exclusive upper bound on age for the passenger restriction.
pub const PASSENGER_LIMIT_AGE: i32 = 21;

pub const MAX_PASSENGERS_WITH_LIMIT: u8 = 2;

/// Night window for night-only escort, 21:00 inclusive to 06:00 exclusive.
pub const NIGHT_START_HOUR: u32 = 21;
pub const NIGHT_END_HOUR: u32 = 6;

/// Whether a wall-clock time falls inside the night escort window.
pub fn is_night_time(time: NaiveTime) -> bool {
    let hour = time.hour();
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}
