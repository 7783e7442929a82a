//! Day status: the work-day predicate combined with a worker's vacation,
//! overtime and absence records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Absence, WorkerConfig};

use super::is_work_day;

/// What a worker's calendar shows for a single date.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::DayStatus;
///
/// assert_eq!(serde_json::to_string(&DayStatus::Overtime).unwrap(), "\"overtime\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Not scheduled and nothing recorded.
    Off,
    /// Scheduled work day.
    Work,
    /// Extra day worked outside the schedule.
    Overtime,
    /// Booked vacation.
    Vacation,
    /// Recorded absence.
    Absence,
}

impl DayStatus {
    /// Returns true if the worker is expected at work.
    pub fn is_on_duty(&self) -> bool {
        matches!(self, DayStatus::Work | DayStatus::Overtime)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Off => write!(f, "Off"),
            DayStatus::Work => write!(f, "Work"),
            DayStatus::Overtime => write!(f, "Overtime"),
            DayStatus::Vacation => write!(f, "Vacation"),
            DayStatus::Absence => write!(f, "Absence"),
        }
    }
}

/// Returns true if `date` is a booked vacation day on or after the start date.
pub fn is_vacation_day(date: NaiveDate, worker: &WorkerConfig) -> bool {
    date >= worker.cycle_start_date && worker.vacation_dates.contains(&date)
}

/// Returns true if `date` is a recorded overtime day on or after the start date.
pub fn is_overtime_day(date: NaiveDate, worker: &WorkerConfig) -> bool {
    date >= worker.cycle_start_date && worker.overtime_dates.contains(&date)
}

/// Returns true if `absences` holds a record for this worker on `date`, on or
/// after the start date.
pub fn is_absence_day(date: NaiveDate, worker: &WorkerConfig, absences: &[Absence]) -> bool {
    date >= worker.cycle_start_date
        && absences
            .iter()
            .any(|a| a.date == date && a.worker_id == worker.id)
}

/// Classifies `date` for `worker`.
///
/// Precedence is vacation, then absence, then overtime, then the schedule.
/// An overtime record on a scheduled day reads as [`DayStatus::Work`].
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{day_status, DayStatus};
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let mut worker = WorkerConfig::new(
///     "w1", "Clerk", WorkTurn::Morning, ShiftPattern::FixedFiveTwo, date("2024-01-01"),
/// );
/// worker.overtime_dates.insert(date("2024-01-06"));
///
/// assert_eq!(day_status(date("2024-01-05"), &worker, &[]), DayStatus::Work);
/// assert_eq!(day_status(date("2024-01-06"), &worker, &[]), DayStatus::Overtime);
/// assert_eq!(day_status(date("2024-01-07"), &worker, &[]), DayStatus::Off);
/// ```
pub fn day_status(date: NaiveDate, worker: &WorkerConfig, absences: &[Absence]) -> DayStatus {
    if is_vacation_day(date, worker) {
        DayStatus::Vacation
    } else if is_absence_day(date, worker, absences) {
        DayStatus::Absence
    } else if is_work_day(date, worker) {
        DayStatus::Work
    } else if is_overtime_day(date, worker) {
        DayStatus::Overtime
    } else {
        DayStatus::Off
    }
}

/// Returns true if the worker is scheduled or doing overtime on `date` and is
/// neither absent nor on vacation.
pub fn is_on_duty(date: NaiveDate, worker: &WorkerConfig, absences: &[Absence]) -> bool {
    day_status(date, worker, absences).is_on_duty()
}
