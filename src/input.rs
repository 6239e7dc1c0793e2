use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::error::{Result, StatusError};

pub const BIRTH_DATE_FIELD: &str = "birth date";
pub const LICENSE_DATE_FIELD: &str = "license date";

/// License category held by the driver. Informational; it does not change
/// any rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    #[default]
    B,
    A,
    A1,
    A2,
    C,
    C1,
    D,
    D1,
}

impl LicenseType {
    pub const ALL: [LicenseType; 8] = [
        LicenseType::B,
        LicenseType::A,
        LicenseType::A1,
        LicenseType::A2,
        LicenseType::C,
        LicenseType::C1,
        LicenseType::D,
        LicenseType::D1,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LicenseType::B => "B",
            LicenseType::A => "A",
            LicenseType::A1 => "A1",
            LicenseType::A2 => "A2",
            LicenseType::C => "C",
            LicenseType::C1 => "C1",
            LicenseType::D => "D",
            LicenseType::D1 => "D1",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LicenseType::B => "private car",
            LicenseType::A => "motorcycle",
            LicenseType::A1 => "motorcycle up to 125cc",
            LicenseType::A2 => "motorcycle up to 35kW",
            LicenseType::C => "truck",
            LicenseType::C1 => "light truck",
            LicenseType::D => "bus",
            LicenseType::D1 => "minibus",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LicenseType {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        LicenseType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatusError::Config {
                message: format!("unknown license type '{wanted}'"),
            })
    }
}

/// The two dates every status is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInput {
    pub birth_date: NaiveDate,
    pub license_date: NaiveDate,
    #[serde(default)]
    pub license_type: LicenseType,
}

impl DriverInput {
    pub fn new(birth_date: NaiveDate, license_date: NaiveDate) -> Self {
        Self {
            birth_date,
            license_date,
            license_type: LicenseType::default(),
        }
    }

    pub fn with_license_type(mut self, license_type: LicenseType) -> Self {
        self.license_type = license_type;
        self
    }

    /// Parse raw textual dates; either one absent or unreadable is an input error.
    pub fn parse(birth_date: Option<&str>, license_date: Option<&str>) -> Result<Self> {
        let birth = parse_date(BIRTH_DATE_FIELD, birth_date.unwrap_or_default())?;
        let license = parse_date(LICENSE_DATE_FIELD, license_date.unwrap_or_default())?;
        Ok(Self::new(birth, license))
    }
}
