// Runtime settings for the whole service.
//
// Loaded once from `TIME_TRACKING_*` environment variables and handed to each
// component as a narrow policy struct. Nothing reads the environment after
// startup.

use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "TIME_TRACKING_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_overtime_threshold_hours")]
    pub overtime_threshold_hours: f64,
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: f64,
    #[serde(default = "default_max_edit_days")]
    pub max_edit_days: i64,
    #[serde(default)]
    pub one_log_per_day: bool,
    #[serde(default = "default_aggregation_write_attempts")]
    pub aggregation_write_attempts: u32,
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    #[serde(default)]
    pub bootstrap_admin_email: Option<String>,
    #[serde(default)]
    pub bootstrap_admin_password_hash: Option<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_overtime_threshold_hours() -> f64 {
    8.0
}

fn default_max_hours_per_day() -> f64 {
    16.0
}

fn default_max_edit_days() -> i64 {
    30
}

fn default_aggregation_write_attempts() -> u32 {
    2
}

fn default_page_size() -> u64 {
    50
}

fn default_max_page_size() -> u64 {
    100
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            overtime_threshold_hours: default_overtime_threshold_hours(),
            max_hours_per_day: default_max_hours_per_day(),
            max_edit_days: default_max_edit_days(),
            one_log_per_day: false,
            aggregation_write_attempts: default_aggregation_write_attempts(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            cors_origins: default_cors_origins(),
            bootstrap_admin_email: None,
            bootstrap_admin_password_hash: None,
        }
    }
}

/// Inputs of the daily overtime aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvertimePolicy {
    pub threshold_hours: f64,
    pub write_attempts: u32,
}

/// Validation limits applied to time entry mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryPolicy {
    pub max_hours_per_day: f64,
    pub max_edit_days: i64,
    pub one_log_per_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings: Settings = envy::prefixed(ENV_PREFIX).from_env()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let settings: Settings = envy::prefixed(ENV_PREFIX).from_iter(pairs)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overtime_threshold_hours.is_nan() || self.overtime_threshold_hours <= 0.0 {
            return Err(ConfigError::Invalid {
                name: "overtime_threshold_hours",
                reason: format!("must be positive, got {}", self.overtime_threshold_hours),
            });
        }
        if self.max_hours_per_day < self.overtime_threshold_hours {
            return Err(ConfigError::Invalid {
                name: "max_hours_per_day",
                reason: format!(
                    "{} is below the overtime threshold {}",
                    self.max_hours_per_day, self.overtime_threshold_hours
                ),
            });
        }
        if self.max_edit_days < 0 {
            return Err(ConfigError::Invalid {
                name: "max_edit_days",
                reason: "must not be negative".to_string(),
            });
        }
        if self.aggregation_write_attempts == 0 {
            return Err(ConfigError::Invalid {
                name: "aggregation_write_attempts",
                reason: "at least one attempt is required".to_string(),
            });
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid {
                name: "default_page_size",
                reason: format!(
                    "must be between 1 and max_page_size ({})",
                    self.max_page_size
                ),
            });
        }
        Ok(())
    }

    pub fn overtime_policy(&self) -> OvertimePolicy {
        OvertimePolicy {
            threshold_hours: self.overtime_threshold_hours,
            write_attempts: self.aggregation_write_attempts,
        }
    }

    pub fn entry_policy(&self) -> EntryPolicy {
        EntryPolicy {
            max_hours_per_day: self.max_hours_per_day,
            max_edit_days: self.max_edit_days,
            one_log_per_day: self.one_log_per_day,
        }
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}
