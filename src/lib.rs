//! Graduated-licensing status engine.
//!
//! [`compute_status`] maps a birth date, a license date and a reference date
//! to a [`DriverStatusReport`]: whether the holder is still a new driver,
//! which escort mode applies, and whether passengers are limited. Every
//! function is pure; the reference date is always passed in (or captured once
//! from the local clock by `compute_status`).

pub mod config;
pub mod dates;
pub mod error;
pub mod format;
pub mod input;
pub mod logger;
pub mod policy;
pub mod reminder;
pub mod render;
pub mod rules;
pub mod status;
pub mod summary;

pub use error::{Result, StatusError};
pub use format::{format_date, format_days_remaining};
pub use input::{DriverInput, LicenseType};
pub use rules::AccompanimentStatus;
pub use status::{DriverStatusReport, compute_status};
