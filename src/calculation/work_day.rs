//! Work-day predicate.
//!
//! Decides whether a worker is scheduled on a calendar date. All arithmetic is
//! done on [`NaiveDate`], so differences are whole calendar days and no
//! timezone or daylight-saving artifact can shift the result.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};
use crate::models::{EffectiveConfig, ShiftPattern, WorkerConfig};

use super::resolve_effective_config;

/// Returns whether `date` is a scheduled work day for `worker`.
///
/// The configuration in force on `date` is resolved first (see
/// [`resolve_effective_config`]). Dates before the worker's start date, or
/// before the anchor of the regime in force, are never work days.
///
/// | Pattern | Work day when |
/// |---|---|
/// | `FixedFiveTwo` | Monday to Friday |
/// | `FixedSixOne` | Monday to Saturday |
/// | `TwelveThirtySix` | days since anchor is even |
/// | `Rotating` | position in the N+M cycle is below N |
/// | `Flexible` | weekday not in `fixed_off_weekdays` |
/// | `Unrecognized` | always |
///
/// # Example
///
/// ```
/// use shift_engine::calculation::is_work_day;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let worker = WorkerConfig::new(
///     "w1", "Nurse", WorkTurn::Night, ShiftPattern::TwelveThirtySix, date("2024-01-01"),
/// );
///
/// assert!(is_work_day(date("2024-01-01"), &worker));
/// assert!(!is_work_day(date("2024-01-02"), &worker));
/// assert!(is_work_day(date("2024-01-03"), &worker));
/// assert!(!is_work_day(date("2023-12-31"), &worker));
/// ```
pub fn is_work_day(date: NaiveDate, worker: &WorkerConfig) -> bool {
    if date < worker.cycle_start_date {
        return false;
    }

    let effective = resolve_effective_config(date, worker);
    evaluate_pattern(date, &effective)
}

/// Fail-soft variant of [`is_work_day`] for raw date input.
///
/// Any string that is not a valid calendar date yields `false`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::is_work_day_str;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let worker = WorkerConfig::new(
///     "w1", "Clerk", WorkTurn::Morning, ShiftPattern::FixedFiveTwo,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// );
///
/// assert!(is_work_day_str("2024-01-02", &worker));
/// assert!(!is_work_day_str("", &worker));
/// assert!(!is_work_day_str("2024-02-30", &worker));
/// ```
pub fn is_work_day_str(date: &str, worker: &WorkerConfig) -> bool {
    match parse_date(date) {
        Ok(date) => is_work_day(date, worker),
        Err(_) => false,
    }
}

/// Evaluates the pattern rule of an already-resolved configuration.
///
/// Returns `false` for dates before `config.cycle_start_date`.
pub fn evaluate_pattern(date: NaiveDate, config: &EffectiveConfig) -> bool {
    if date < config.cycle_start_date {
        return false;
    }

    let weekday = date.weekday().num_days_from_sunday();

    match config.shift_pattern {
        ShiftPattern::FixedFiveTwo => (1..=5).contains(&weekday),
        ShiftPattern::FixedSixOne => (1..=6).contains(&weekday),
        ShiftPattern::TwelveThirtySix => {
            calendar_day_difference(date, config.cycle_start_date).rem_euclid(2) == 0
        }
        ShiftPattern::Rotating => {
            let cycle = config.cycle_length();
            let position = calendar_day_difference(date, config.cycle_start_date).rem_euclid(cycle);
            position < i64::from(config.work_days())
        }
        ShiftPattern::Flexible => !config
            .fixed_off_weekdays
            .iter()
            .any(|&off| u32::from(off) == weekday),
        ShiftPattern::Unrecognized => true,
    }
}

/// Number of midnights between `from` and `to` (negative if `to` is earlier).
///
/// # Example
///
/// ```
/// use shift_engine::calculation::calendar_day_difference;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// assert_eq!(calendar_day_difference(b, a), 1);
/// assert_eq!(calendar_day_difference(a, b), -1);
/// ```
pub fn calendar_day_difference(to: NaiveDate, from: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Parses a `yyyy-MM-dd` date. A trailing time component is accepted and
/// discarded.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|_| EngineError::InvalidDate {
            value: value.to_string(),
        })
}
