use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{DriverInput, LicenseType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "driver-status")]
#[command(about = "Check new-driver, escort and passenger-limit status")]
pub struct CliConfig {
    #[arg(long, help = "Birth date (yyyy-mm-dd)")]
    pub birth_date: Option<String>,

    #[arg(long, help = "License issue date (yyyy-mm-dd)")]
    pub license_date: Option<String>,

    #[arg(long, help = "License category, e.g. B or A1")]
    pub license_type: Option<LicenseType>,

    #[arg(long, help = "Evaluate as of this date instead of today")]
    pub as_of: Option<NaiveDate>,

    #[arg(long, help = "TOML profile holding saved driver details")]
    pub profile: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Print a one-line shareable status message")]
    pub share: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Saved driver details. Dates stay textual so a broken value is reported the
/// same way as one typed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub birth_date: Option<String>,
    pub license_date: Option<String>,
    pub license_type: Option<LicenseType>,
}

impl DriverProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl CliConfig {
    /// Merge the optional profile with command-line values (command line wins)
    /// and parse the result.
    pub fn resolve_input(&self) -> Result<DriverInput> {
        let profile = match &self.profile {
            Some(path) => {
                tracing::debug!("Loading profile from {}", path.display());
                DriverProfile::from_file(path)?
            }
            None => DriverProfile::default(),
        };

        let birth = self.birth_date.as_deref().or(profile.birth_date.as_deref());
        let license = self
            .license_date
            .as_deref()
            .or(profile.license_date.as_deref());
        let license_type = self
            .license_type
            .or(profile.license_type)
            .unwrap_or_default();

        Ok(DriverInput::parse(birth, license)?.with_license_type(license_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatusError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> CliConfig {
        let mut argv = vec!["driver-status"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_cli_flags() {
        let config = cli(&[
            "--birth-date",
            "2005-01-01",
            "--license-date",
            "2023-01-01",
            "--license-type",
            "a2",
            "--as-of",
            "2024-06-15",
            "--format",
            "json",
        ]);
        assert_eq!(config.license_type, Some(LicenseType::A2));
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.share);
    }

    #[test]
    fn test_rejects_malformed_as_of() {
        let result = CliConfig::try_parse_from(["driver-status", "--as-of", "tomorrow"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_from_toml() {
        let profile = DriverProfile::from_toml_str(
            r#"
birth_date = "2005-01-01"
license_date = "2023-01-01"
license_type = "A1"
"#,
        )
        .unwrap();
        assert_eq!(profile.birth_date.as_deref(), Some("2005-01-01"));
        assert_eq!(profile.license_type, Some(LicenseType::A1));
    }

    #[test]
    fn test_command_line_overrides_profile() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "birth_date = \"2005-01-01\"").unwrap();
        writeln!(file, "license_date = \"2023-01-01\"").unwrap();
        writeln!(file, "license_type = \"C\"").unwrap();

        let path = file.path().to_str().unwrap();
        let config = cli(&["--profile", path, "--license-date", "2024-02-01"]);
        let input = config.resolve_input().unwrap();

        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(2005, 1, 1).unwrap());
        assert_eq!(input.license_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(input.license_type, LicenseType::C);
    }

    #[test]
    fn test_missing_dates_are_input_errors() {
        let err = cli(&["--birth-date", "2005-01-01"]).resolve_input().unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_unreadable_profile_is_not_an_input_error() {
        let config = cli(&["--profile", "/nonexistent/driver.toml"]);
        let err = config.resolve_input().unwrap_err();
        assert!(matches!(err, StatusError::Io(_)));
        assert!(!err.is_input_error());
    }
}
