//! Monthly work and presence totals for a single worker.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, WorkerConfig};

use super::{is_overtime_day, is_work_day};

/// Work and presence totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Days that are scheduled work days or recorded overtime.
    pub work_days: u32,
    /// Absences recorded for the worker within the month.
    pub absences: u32,
    /// Whole-percent presence rate; 100 when there are no work days.
    pub presence_rate: Decimal,
}

/// Summarizes `year`-`month` for `worker`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRequest`] if `month` is not in 1..=12 or the
/// year is out of range.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::month_summary;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let worker = WorkerConfig::new(
///     "w1", "Clerk", WorkTurn::Morning, ShiftPattern::FixedFiveTwo,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// );
///
/// let summary = month_summary(2024, 1, &worker, &[]).unwrap();
/// assert_eq!(summary.work_days, 23);
/// assert_eq!(summary.presence_rate, Decimal::from(100));
/// ```
pub fn month_summary(
    year: i32,
    month: u32,
    worker: &WorkerConfig,
    absences: &[Absence],
) -> EngineResult<MonthSummary> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::InvalidRequest {
            message: format!("invalid month {}-{}", year, month),
        }
    })?;

    let work_days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|&d| is_work_day(d, worker) || is_overtime_day(d, worker))
        .count() as u32;

    let absences = absences
        .iter()
        .filter(|a| a.worker_id == worker.id && a.date.year() == year && a.date.month() == month)
        .count() as u32;

    Ok(MonthSummary {
        year,
        month,
        work_days,
        absences,
        presence_rate: presence_rate(work_days, absences),
    })
}

fn presence_rate(work_days: u32, absences: u32) -> Decimal {
    if work_days == 0 {
        return Decimal::ONE_HUNDRED;
    }
    let present = Decimal::from(work_days) - Decimal::from(absences);
    (present * Decimal::ONE_HUNDRED / Decimal::from(work_days))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
