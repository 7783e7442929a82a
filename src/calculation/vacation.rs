//! Vacation planning checks.
//!
//! A vacation must start on a scheduled work day, must not overlap vacation or
//! absences already recorded for the worker, and is checked against peers of
//! the same role booking the same days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, WorkerConfig};

use super::{calendar_day_difference, is_work_day};

/// How far ahead [`suggest_vacation_start`] looks for a work day.
pub const SUGGESTION_WINDOW_DAYS: i64 = 7;

/// Longest vacation block a single request may cover, in days.
pub const MAX_VACATION_DAYS: u32 = 30;

/// A requested vacation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// First day of vacation.
    pub start_date: NaiveDate,
    /// Number of calendar days, including the start date.
    pub duration_days: u32,
}

impl VacationRequest {
    /// Checks that the duration is between 1 and [`MAX_VACATION_DAYS`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.duration_days == 0 {
            return Err(EngineError::InvalidRequest {
                message: "duration_days must be at least 1".to_string(),
            });
        }
        if self.duration_days > MAX_VACATION_DAYS {
            return Err(EngineError::InvalidRequest {
                message: format!("duration_days must be at most {}", MAX_VACATION_DAYS),
            });
        }
        Ok(())
    }

    /// Last day of vacation (inclusive).
    pub fn end_date(&self) -> EngineResult<NaiveDate> {
        self.validate()?;
        self.start_date
            .checked_add_signed(Duration::days(i64::from(self.duration_days) - 1))
            .ok_or_else(|| EngineError::InvalidRequest {
                message: format!("vacation starting {} runs past the calendar", self.start_date),
            })
    }

    /// Every day of the block, in order.
    pub fn dates(&self) -> EngineResult<Vec<NaiveDate>> {
        let end = self.end_date()?;
        Ok(self.start_date.iter_days().take_while(|d| *d <= end).collect())
    }
}

/// A peer of the same role with vacation on some of the requested days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConflict {
    /// The peer's id.
    pub worker_id: String,
    /// The requested days the peer is also on vacation.
    pub dates: Vec<NaiveDate>,
}

/// Outcome of checking a [`VacationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCheck {
    /// First day of vacation.
    pub start_date: NaiveDate,
    /// Last day of vacation (inclusive).
    pub end_date: NaiveDate,
    /// Whether the start date is a scheduled work day.
    pub start_is_work_day: bool,
    /// Requested days already booked as vacation.
    pub vacation_overlap: Vec<NaiveDate>,
    /// Requested days with a recorded absence.
    pub absence_overlap: Vec<NaiveDate>,
    /// Same-role peers on vacation during the request.
    pub peer_conflicts: Vec<PeerConflict>,
    /// True if the request must be refused.
    pub has_personal_conflict: bool,
}

/// A run of consecutive vacation days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// First day.
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
    /// Number of days in the run.
    pub days: u32,
}

/// Suggests a start date for a vacation.
///
/// Returns `from` if it is a work day, otherwise the first work day within
/// the following [`SUGGESTION_WINDOW_DAYS`] days, otherwise `from`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::suggest_vacation_start;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let worker = WorkerConfig::new(
///     "w1", "Clerk", WorkTurn::Morning, ShiftPattern::FixedFiveTwo, date("2024-01-01"),
/// );
///
/// // Saturday -> next Monday
/// assert_eq!(suggest_vacation_start(date("2024-01-06"), &worker), date("2024-01-08"));
/// ```
pub fn suggest_vacation_start(from: NaiveDate, worker: &WorkerConfig) -> NaiveDate {
    if is_work_day(from, worker) {
        return from;
    }

    (1..=SUGGESTION_WINDOW_DAYS)
        .filter_map(|offset| from.checked_add_signed(Duration::days(offset)))
        .find(|&candidate| is_work_day(candidate, worker))
        .unwrap_or(from)
}

/// Checks a vacation request for `worker` against its own records and `team`.
///
/// Peers are the other members of `team` (by id) that share the worker's
/// base role.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRequest`] for a zero-day request or one
/// longer than [`MAX_VACATION_DAYS`].
pub fn check_vacation_request(
    request: &VacationRequest,
    worker: &WorkerConfig,
    team: &[WorkerConfig],
    absences: &[Absence],
) -> EngineResult<VacationCheck> {
    let dates = request.dates()?;
    let end_date = request.end_date()?;

    let start_is_work_day = is_work_day(request.start_date, worker);

    let vacation_overlap: Vec<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| worker.vacation_dates.contains(d))
        .collect();

    let absence_overlap: Vec<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| {
            absences
                .iter()
                .any(|a| a.worker_id == worker.id && a.date == *d)
        })
        .collect();

    let peer_conflicts: Vec<PeerConflict> = team
        .iter()
        .filter(|peer| peer.id != worker.id && peer.role == worker.role)
        .filter_map(|peer| {
            let common: Vec<NaiveDate> = dates
                .iter()
                .copied()
                .filter(|d| peer.vacation_dates.contains(d))
                .collect();
            (!common.is_empty()).then(|| PeerConflict {
                worker_id: peer.id.clone(),
                dates: common,
            })
        })
        .collect();

    let has_personal_conflict =
        !vacation_overlap.is_empty() || !absence_overlap.is_empty() || !start_is_work_day;

    Ok(VacationCheck {
        start_date: request.start_date,
        end_date,
        start_is_work_day,
        vacation_overlap,
        absence_overlap,
        peer_conflicts,
        has_personal_conflict,
    })
}

/// Groups vacation days into runs of consecutive calendar days.
///
/// Input order does not matter; duplicates are collapsed.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::vacation_periods;
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let periods = vacation_periods([
///     date("2024-03-03"), date("2024-03-01"), date("2024-03-02"), date("2024-03-10"),
/// ]);
///
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0].days, 3);
/// assert_eq!(periods[1].start, date("2024-03-10"));
/// ```
pub fn vacation_periods<I>(dates: I) -> Vec<VacationPeriod>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut sorted: Vec<NaiveDate> = dates.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut periods: Vec<VacationPeriod> = Vec::new();
    for date in sorted {
        match periods.last_mut() {
            Some(current) if calendar_day_difference(date, current.end) == 1 => {
                current.end = date;
                current.days += 1;
            }
            _ => periods.push(VacationPeriod {
                start: date,
                end: date,
                days: 1,
            }),
        }
    }
    periods
}
