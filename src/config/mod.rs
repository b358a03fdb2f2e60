use crate::core::projection::{DEFAULT_MAX_DAY_ADVANCES, ProjectionOptions};
use crate::errors::{AppError, AppResult};
use crate::models::{Coverage, ShiftHours, Span};
use crate::utils::date::parse_date;
use crate::utils::time::parse_minute_of_day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Plant calendar settings, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_morning_shift")]
    pub morning_shift: String,
    #[serde(default = "default_morning_break")]
    pub morning_break: String,
    #[serde(default = "default_afternoon_shift")]
    pub afternoon_shift: String,
    #[serde(default = "default_afternoon_break")]
    pub afternoon_break: String,
    #[serde(default = "default_saturday_shift")]
    pub saturday_shift: String,
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_coverage")]
    pub default_coverage: String,
    #[serde(default)]
    pub work_saturday: bool,
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default = "default_max_day_advances")]
    pub max_day_advances: u32,
    #[serde(default)]
    pub strict_shift_start: bool,
}

fn default_morning_shift() -> String {
    "06:00-13:50".to_string()
}
fn default_morning_break() -> String {
    "12:00-12:20".to_string()
}
fn default_afternoon_shift() -> String {
    "13:50-21:40".to_string()
}
fn default_afternoon_break() -> String {
    "19:30-19:50".to_string()
}
fn default_saturday_shift() -> String {
    "06:00-12:00".to_string()
}
fn default_day_start() -> String {
    "06:00".to_string()
}
fn default_coverage() -> String {
    "continuous".to_string()
}
fn default_max_day_advances() -> u32 {
    DEFAULT_MAX_DAY_ADVANCES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            morning_shift: default_morning_shift(),
            morning_break: default_morning_break(),
            afternoon_shift: default_afternoon_shift(),
            afternoon_break: default_afternoon_break(),
            saturday_shift: default_saturday_shift(),
            day_start: default_day_start(),
            default_coverage: default_coverage(),
            work_saturday: false,
            holidays: Vec::new(),
            max_day_advances: default_max_day_advances(),
            strict_shift_start: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rshiftplan`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rshiftplan")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftplan.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Parse the shift strings into validated hours.
    pub fn shift_hours(&self) -> AppResult<ShiftHours> {
        let hours = ShiftHours {
            morning: parse_span("morning_shift", &self.morning_shift)?,
            morning_break: parse_span("morning_break", &self.morning_break)?,
            afternoon: parse_span("afternoon_shift", &self.afternoon_shift)?,
            afternoon_break: parse_span("afternoon_break", &self.afternoon_break)?,
            saturday: parse_span("saturday_shift", &self.saturday_shift)?,
            day_start: parse_minute_of_day(&self.day_start).ok_or_else(|| {
                AppError::Config(format!("day_start: invalid time '{}'", self.day_start))
            })?,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn coverage(&self) -> AppResult<Coverage> {
        Coverage::from_code(&self.default_coverage).ok_or_else(|| {
            AppError::Config(format!(
                "default_coverage: unknown value '{}' (use continuous, morning or afternoon)",
                self.default_coverage
            ))
        })
    }

    pub fn holiday_dates(&self) -> AppResult<Vec<NaiveDate>> {
        self.holidays
            .iter()
            .map(|h| {
                parse_date(h).ok_or_else(|| AppError::Config(format!("holidays: invalid date '{h}'")))
            })
            .collect()
    }

    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            max_day_advances: self.max_day_advances,
            strict_shift_start: self.strict_shift_start,
        }
    }

    /// Write a default configuration file at `path` (skipped in test mode).
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if !is_test {
            config.save(path)?;
        }

        Ok(config)
    }
}

fn parse_span(field: &str, value: &str) -> AppResult<Span> {
    Span::parse(value).map_err(|e| AppError::Config(format!("{field}: {e}")))
}
