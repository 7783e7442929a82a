//! Consecutive work-day streaks and the mandatory-rest alert.
//!
//! A worker may not be on duty for more than a configured number of
//! consecutive days (six, under the default policy) without a rest day.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::CompliancePolicy;
use crate::models::{Absence, WorkerConfig};

use super::is_on_duty;

/// The run of consecutive on-duty days ending at `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStreak {
    /// The last day of the run (the day the streak was measured at).
    pub end_date: NaiveDate,
    /// Number of consecutive on-duty days ending at `end_date`.
    pub count: u32,
    /// The days of the run, oldest first.
    pub dates: Vec<NaiveDate>,
    /// The policy limit the run was checked against.
    pub limit: u32,
    /// True when `count` is above `limit`.
    pub exceeds_limit: bool,
}

/// Measures the on-duty streak ending at `date`.
///
/// Walks backwards from `date` while the worker is on duty (scheduled or
/// overtime, not absent, not on vacation). The walk stops before the
/// worker's start date and after `policy.streak_lookback_days` days.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::work_streak;
/// use shift_engine::config::CompliancePolicy;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let mut worker = WorkerConfig::new(
///     "w1", "Clerk", WorkTurn::Morning, ShiftPattern::FixedSixOne, date("2024-01-01"),
/// );
/// let policy = CompliancePolicy::default();
///
/// // Monday to Saturday
/// let streak = work_streak(date("2024-01-06"), &worker, &[], &policy);
/// assert_eq!(streak.count, 6);
/// assert!(!streak.exceeds_limit);
///
/// // Working the Sunday as overtime makes it seven in a row.
/// worker.overtime_dates.insert(date("2024-01-07"));
/// let streak = work_streak(date("2024-01-07"), &worker, &[], &policy);
/// assert_eq!(streak.count, 7);
/// assert!(streak.exceeds_limit);
/// ```
pub fn work_streak(
    date: NaiveDate,
    worker: &WorkerConfig,
    absences: &[Absence],
    policy: &CompliancePolicy,
) -> WorkStreak {
    let start = worker.cycle_start_date;
    let mut dates = Vec::new();

    if date >= start {
        let mut check_date = date;
        while is_on_duty(check_date, worker, absences) {
            dates.push(check_date);

            if dates.len() as u32 >= policy.streak_lookback_days {
                break;
            }
            match check_date.checked_sub_signed(Duration::days(1)) {
                Some(previous) if previous >= start => check_date = previous,
                _ => break,
            }
        }
    }

    dates.reverse();
    let count = dates.len() as u32;

    WorkStreak {
        end_date: date,
        count,
        dates,
        limit: policy.max_consecutive_work_days,
        exceeds_limit: count > policy.max_consecutive_work_days,
    }
}
