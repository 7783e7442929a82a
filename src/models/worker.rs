//! Worker configuration and career history.
//!
//! A [`WorkerConfig`] is the currently active configuration of a worker as
//! maintained by the surrounding application. The engine only ever reads it.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{ShiftPattern, WorkTurn};

/// A partial override that takes effect on `effective_date`.
///
/// Only the fields that are `Some` are applied. Records a regime change such
/// as a promotion or a new schedule.
///
/// # Example
///
/// ```
/// use shift_engine::models::{CareerChange, ShiftPattern};
/// use chrono::NaiveDate;
///
/// let change = CareerChange {
///     effective_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     shift_pattern: Some(ShiftPattern::Rotating),
///     rotating_work_days: Some(4),
///     rotating_off_days: Some(2),
///     ..CareerChange::default()
/// };
/// assert!(change.role.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareerChange {
    /// The date from which the change applies (inclusive).
    pub effective_date: NaiveDate,
    /// New shift pattern, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_pattern: Option<ShiftPattern>,
    /// New fixed off weekdays (0 = Sunday .. 6 = Saturday), if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_off_weekdays: Option<Vec<u8>>,
    /// New number of consecutive work days in a rotating cycle, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotating_work_days: Option<u32>,
    /// New number of consecutive off days in a rotating cycle, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotating_off_days: Option<u32>,
    /// New role, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// New turn, if changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<WorkTurn>,
}

/// The base configuration of a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Unique identifier for the worker.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job role, used to group workers and detect vacation conflicts.
    pub role: String,
    /// Rostered turn.
    pub turn: WorkTurn,
    /// Currently active shift pattern.
    pub shift_pattern: ShiftPattern,
    /// Anchor for cycle-based patterns. No schedule exists before this date.
    pub cycle_start_date: NaiveDate,
    /// Weekdays off under [`ShiftPattern::Flexible`] (0 = Sunday .. 6 = Saturday).
    #[serde(default)]
    pub fixed_off_weekdays: Vec<u8>,
    /// Consecutive work days under [`ShiftPattern::Rotating`].
    #[serde(default)]
    pub rotating_work_days: Option<u32>,
    /// Consecutive off days under [`ShiftPattern::Rotating`].
    #[serde(default)]
    pub rotating_off_days: Option<u32>,
    /// Brazilian federative unit (e.g. "SP"), used for state holidays.
    #[serde(default)]
    pub state: Option<String>,
    /// Booked vacation days.
    #[serde(default)]
    pub vacation_dates: BTreeSet<NaiveDate>,
    /// Extra days worked outside the schedule.
    #[serde(default)]
    pub overtime_dates: BTreeSet<NaiveDate>,
    /// Regime changes, in any order.
    #[serde(default)]
    pub change_history: Vec<CareerChange>,
}

impl WorkerConfig {
    /// Creates a worker with no history, vacations or overtime.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
    /// use chrono::NaiveDate;
    ///
    /// let worker = WorkerConfig::new(
    ///     "w1",
    ///     "Nurse",
    ///     WorkTurn::Night,
    ///     ShiftPattern::TwelveThirtySix,
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    /// );
    /// assert!(worker.change_history.is_empty());
    /// ```
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        turn: WorkTurn,
        shift_pattern: ShiftPattern,
        cycle_start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role: role.into(),
            turn,
            shift_pattern,
            cycle_start_date,
            fixed_off_weekdays: Vec::new(),
            rotating_work_days: None,
            rotating_off_days: None,
            state: None,
            vacation_dates: BTreeSet::new(),
            overtime_dates: BTreeSet::new(),
            change_history: Vec::new(),
        }
    }

    /// Checks the cadence and weekday fields of the base configuration and
    /// of every history entry.
    ///
    /// The work-day predicate does not require a valid configuration; it
    /// falls back to defaults instead. This is for collaborators that want to
    /// reject bad input at the edge.
    pub fn validate(&self) -> EngineResult<()> {
        check_cadence("rotating_work_days", self.rotating_work_days)?;
        check_cadence("rotating_off_days", self.rotating_off_days)?;
        check_weekdays("fixed_off_weekdays", &self.fixed_off_weekdays)?;

        for (index, change) in self.change_history.iter().enumerate() {
            check_cadence(
                &format!("change_history[{}].rotating_work_days", index),
                change.rotating_work_days,
            )?;
            check_cadence(
                &format!("change_history[{}].rotating_off_days", index),
                change.rotating_off_days,
            )?;
            if let Some(weekdays) = &change.fixed_off_weekdays {
                check_weekdays(
                    &format!("change_history[{}].fixed_off_weekdays", index),
                    weekdays,
                )?;
            }
        }

        Ok(())
    }
}

fn check_cadence(field: &str, value: Option<u32>) -> EngineResult<()> {
    match value {
        Some(0) => Err(EngineError::InvalidWorker {
            field: field.to_string(),
            message: "must be at least 1".to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_weekdays(field: &str, weekdays: &[u8]) -> EngineResult<()> {
    match weekdays.iter().find(|&&d| d > 6) {
        Some(day) => Err(EngineError::InvalidWorker {
            field: field.to_string(),
            message: format!("weekday ordinal {} is outside 0..=6", day),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_worker() -> WorkerConfig {
        WorkerConfig::new(
            "w_001",
            "Nurse",
            WorkTurn::Morning,
            ShiftPattern::FixedFiveTwo,
            make_date("2024-01-01"),
        )
    }

    #[test]
    fn test_deserialize_minimal_worker() {
        let json = r#"{
            "id": "w_001",
            "role": "Nurse",
            "turn": "morning",
            "shift_pattern": "5x2",
            "cycle_start_date": "2024-01-01"
        }"#;

        let worker: WorkerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(worker.id, "w_001");
        assert_eq!(worker.shift_pattern, ShiftPattern::FixedFiveTwo);
        assert_eq!(worker.cycle_start_date, make_date("2024-01-01"));
        assert!(worker.fixed_off_weekdays.is_empty());
        assert!(worker.change_history.is_empty());
        assert_eq!(worker.rotating_work_days, None);
    }

    #[test]
    fn test_deserialize_worker_with_history() {
        let json = r#"{
            "id": "w_002",
            "name": "Ana",
            "role": "Technician",
            "turn": "Noite",
            "shift_pattern": "12x36",
            "cycle_start_date": "2024-01-01",
            "vacation_dates": ["2024-03-02", "2024-03-01"],
            "change_history": [
                {
                    "effective_date": "2024-06-01",
                    "shift_pattern": "Revezamento",
                    "rotating_work_days": 4,
                    "rotating_off_days": 2
                }
            ]
        }"#;

        let worker: WorkerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(worker.turn, WorkTurn::Night);
        assert_eq!(worker.change_history.len(), 1);
        assert_eq!(
            worker.change_history[0].shift_pattern,
            Some(ShiftPattern::Rotating)
        );
        assert_eq!(
            worker.vacation_dates.iter().next(),
            Some(&make_date("2024-03-01"))
        );
    }

    #[test]
    fn test_deserialize_rejects_malformed_start_date() {
        let json = r#"{
            "id": "w_003",
            "role": "Nurse",
            "turn": "morning",
            "shift_pattern": "5x2",
            "cycle_start_date": "01/01/2024"
        }"#;

        let result: Result<WorkerConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_career_change_omits_unset_fields() {
        let change = CareerChange {
            effective_date: make_date("2024-06-01"),
            role: Some("Supervisor".to_string()),
            ..CareerChange::default()
        };

        let json = serde_json::to_string(&change).unwrap();
        assert!(json.contains("\"role\":\"Supervisor\""));
        assert!(!json.contains("shift_pattern"));
    }

    #[test]
    fn test_validate_accepts_default_worker() {
        assert!(create_test_worker().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cadence() {
        let mut worker = create_test_worker();
        worker.rotating_off_days = Some(0);

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => {
                assert_eq!(field, "rotating_off_days");
            }
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_weekday_out_of_range() {
        let mut worker = create_test_worker();
        worker.fixed_off_weekdays = vec![0, 7];

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, message }) => {
                assert_eq!(field, "fixed_off_weekdays");
                assert!(message.contains('7'));
            }
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_checks_history_entries() {
        let mut worker = create_test_worker();
        worker.change_history.push(CareerChange {
            effective_date: make_date("2024-02-01"),
            rotating_work_days: Some(0),
            ..CareerChange::default()
        });

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => {
                assert_eq!(field, "change_history[0].rotating_work_days");
            }
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }
}
