//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

use super::types::{
    CompliancePolicy, EngineConfig, HolidayCalendar, HolidaysConfig, PolicyConfig,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/brazil/
/// ├── policy.yaml    # Policy metadata and compliance limits
/// └── holidays.yaml  # National and per-state holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/brazil").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        Ok(Self::from_config(EngineConfig::new(
            policy,
            HolidayCalendar::from(holidays),
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the compliance limits.
    pub fn compliance(&self) -> &CompliancePolicy {
        self.config.compliance()
    }

    /// Returns the holiday on `date` for a worker in `state`, if any.
    pub fn holiday_on(&self, date: NaiveDate, state: Option<&str>) -> Option<Holiday> {
        self.config.holidays().holiday_on(date, state)
    }
}
