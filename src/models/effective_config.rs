//! The configuration snapshot that applies on a single date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ShiftPattern, WorkTurn, WorkerConfig};

/// Work days per cycle when a rotating cadence is missing or zero.
pub const DEFAULT_ROTATING_WORK_DAYS: u32 = 5;

/// Off days per cycle when a rotating cadence is missing or zero.
pub const DEFAULT_ROTATING_OFF_DAYS: u32 = 1;

/// A worker's configuration after applying every career change effective on
/// or before a given date.
///
/// `cycle_start_date` is the anchor of the current regime: the base start
/// date, or the date of the latest pattern-affecting change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveConfig {
    /// Shift pattern in force.
    pub shift_pattern: ShiftPattern,
    /// Cycle anchor in force.
    pub cycle_start_date: NaiveDate,
    /// Fixed off weekdays (0 = Sunday .. 6 = Saturday).
    pub fixed_off_weekdays: Vec<u8>,
    /// Rotating work days, as supplied.
    pub rotating_work_days: Option<u32>,
    /// Rotating off days, as supplied.
    pub rotating_off_days: Option<u32>,
    /// Role in force.
    pub role: String,
    /// Turn in force.
    pub turn: WorkTurn,
}

impl EffectiveConfig {
    /// Rotating work days with the default applied.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::models::{EffectiveConfig, ShiftPattern, WorkTurn};
    /// use chrono::NaiveDate;
    ///
    /// let config = EffectiveConfig {
    ///     shift_pattern: ShiftPattern::Rotating,
    ///     cycle_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     fixed_off_weekdays: vec![],
    ///     rotating_work_days: None,
    ///     rotating_off_days: Some(0),
    ///     role: "Nurse".to_string(),
    ///     turn: WorkTurn::Morning,
    /// };
    /// assert_eq!(config.work_days(), 5);
    /// assert_eq!(config.off_days(), 1);
    /// assert_eq!(config.cycle_length(), 6);
    /// ```
    pub fn work_days(&self) -> u32 {
        or_default(self.rotating_work_days, DEFAULT_ROTATING_WORK_DAYS)
    }

    /// Rotating off days with the default applied.
    pub fn off_days(&self) -> u32 {
        or_default(self.rotating_off_days, DEFAULT_ROTATING_OFF_DAYS)
    }

    /// Length of a rotating cycle in days. Always at least 2.
    ///
    /// Computed in `i64`: the sum of any two `u32` cadences fits.
    pub fn cycle_length(&self) -> i64 {
        i64::from(self.work_days()) + i64::from(self.off_days())
    }
}

fn or_default(value: Option<u32>, default: u32) -> u32 {
    value.filter(|&n| n > 0).unwrap_or(default)
}

impl From<&WorkerConfig> for EffectiveConfig {
    fn from(worker: &WorkerConfig) -> Self {
        Self {
            shift_pattern: worker.shift_pattern,
            cycle_start_date: worker.cycle_start_date,
            fixed_off_weekdays: worker.fixed_off_weekdays.clone(),
            rotating_work_days: worker.rotating_work_days,
            rotating_off_days: worker.rotating_off_days,
            role: worker.role.clone(),
            turn: worker.turn,
        }
    }
}
