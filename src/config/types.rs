//! Configuration types for the shift engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidayKind};

/// Maximum consecutive on-duty days before a rest day is mandatory.
pub const DEFAULT_MAX_CONSECUTIVE_WORK_DAYS: u32 = 6;

/// How many days a streak measurement looks back at most.
pub const DEFAULT_STREAK_LOOKBACK_DAYS: u32 = 365;

/// Limits used by the consecutive-day alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompliancePolicy {
    /// A streak longer than this raises an alert.
    #[serde(default = "default_max_consecutive_work_days")]
    pub max_consecutive_work_days: u32,
    /// Upper bound on the days a streak walk inspects.
    #[serde(default = "default_streak_lookback_days")]
    pub streak_lookback_days: u32,
}

fn default_max_consecutive_work_days() -> u32 {
    DEFAULT_MAX_CONSECUTIVE_WORK_DAYS
}

fn default_streak_lookback_days() -> u32 {
    DEFAULT_STREAK_LOOKBACK_DAYS
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self {
            max_consecutive_work_days: DEFAULT_MAX_CONSECUTIVE_WORK_DAYS,
            streak_lookback_days: DEFAULT_STREAK_LOOKBACK_DAYS,
        }
    }
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Human-readable name of the policy.
    pub name: String,
    /// Country or region code the policy applies to.
    pub jurisdiction: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Compliance limits.
    #[serde(default)]
    pub compliance: CompliancePolicy,
}

/// A holiday entry as written in `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Holidays file structure (`holidays.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// Holidays observed nationwide.
    #[serde(default)]
    pub national: Vec<HolidayEntry>,
    /// Holidays observed per state, keyed by state code (e.g. "SP").
    #[serde(default)]
    pub states: HashMap<String, Vec<HolidayEntry>>,
}

/// National and state holidays indexed by date.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    national: HashMap<NaiveDate, String>,
    states: HashMap<String, HashMap<NaiveDate, String>>,
}

impl HolidayCalendar {
    /// Returns the holiday on `date`, if any.
    ///
    /// National holidays take precedence over the holidays of `state`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::config::{HolidayCalendar, HolidaysConfig};
    /// use shift_engine::models::HolidayKind;
    /// use chrono::NaiveDate;
    ///
    /// let config: HolidaysConfig = serde_yaml::from_str(r#"
    /// national:
    ///   - date: 2024-12-25
    ///     name: Natal
    /// states:
    ///   SP:
    ///     - date: 2024-07-09
    ///       name: Revolução Constitucionalista
    /// "#).unwrap();
    /// let calendar = HolidayCalendar::from(config);
    ///
    /// let july = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
    /// assert_eq!(calendar.holiday_on(july, Some("SP")).unwrap().kind, HolidayKind::State);
    /// assert!(calendar.holiday_on(july, Some("RJ")).is_none());
    /// ```
    pub fn holiday_on(&self, date: NaiveDate, state: Option<&str>) -> Option<Holiday> {
        if let Some(name) = self.national.get(&date) {
            return Some(Holiday {
                date,
                name: name.clone(),
                kind: HolidayKind::National,
            });
        }

        let state = state?.trim().to_uppercase();
        self.states
            .get(&state)
            .and_then(|days| days.get(&date))
            .map(|name| Holiday {
                date,
                name: name.clone(),
                kind: HolidayKind::State,
            })
    }

    /// Number of distinct holiday dates known to the calendar.
    pub fn len(&self) -> usize {
        self.national.len() + self.states.values().map(HashMap::len).sum::<usize>()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<HolidaysConfig> for HolidayCalendar {
    fn from(config: HolidaysConfig) -> Self {
        let national = config
            .national
            .into_iter()
            .map(|h| (h.date, h.name))
            .collect();
        let states = config
            .states
            .into_iter()
            .map(|(state, entries)| {
                (
                    state.trim().to_uppercase(),
                    entries.into_iter().map(|h| (h.date, h.name)).collect(),
                )
            })
            .collect();
        Self { national, states }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Policy metadata and limits.
    policy: PolicyConfig,
    /// Holiday calendar.
    holidays: HolidayCalendar,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(policy: PolicyConfig, holidays: HolidayCalendar) -> Self {
        Self { policy, holidays }
    }

    /// Returns the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the compliance limits.
    pub fn compliance(&self) -> &CompliancePolicy {
        &self.policy.compliance
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
