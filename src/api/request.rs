//! Request types for the shift engine API.
//!
//! Worker and absence records are accepted in the same shape the domain
//! models deserialize from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::VacationRequest;
use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, WorkerConfig};

/// Longest range `/calendar` will expand, in days.
pub const MAX_CALENDAR_DAYS: i64 = 731;

/// Request body for the `/work-day` endpoint.
///
/// `date` is kept as a raw string: anything that does not parse is answered
/// with `is_work_day: false` rather than a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDayRequest {
    /// The worker to evaluate.
    pub worker: WorkerConfig,
    /// The date to evaluate (`yyyy-MM-dd`).
    #[serde(default)]
    pub date: String,
}

/// Request body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The worker to render.
    pub worker: WorkerConfig,
    /// Absences; records of other workers are ignored.
    #[serde(default)]
    pub absences: Vec<Absence>,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl CalendarRequest {
    /// Checks the worker and the requested range.
    pub fn validate(&self) -> EngineResult<()> {
        self.worker.validate()?;

        let span = (self.end_date - self.start_date).num_days();
        if span < 0 {
            return Err(EngineError::InvalidRequest {
                message: format!(
                    "end_date {} is before start_date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        if span >= MAX_CALENDAR_DAYS {
            return Err(EngineError::InvalidRequest {
                message: format!("range exceeds {} days", MAX_CALENDAR_DAYS),
            });
        }
        Ok(())
    }
}

/// Request body for the `/team/coverage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCoverageRequest {
    /// Team members.
    pub workers: Vec<WorkerConfig>,
    /// Absences of any team member.
    #[serde(default)]
    pub absences: Vec<Absence>,
    /// The day to compute coverage for.
    pub date: NaiveDate,
}

impl TeamCoverageRequest {
    /// Checks every worker.
    pub fn validate(&self) -> EngineResult<()> {
        self.workers.iter().try_for_each(WorkerConfig::validate)
    }
}

/// Request body for the `/vacation/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationCheckRequest {
    /// The worker requesting vacation.
    pub worker: WorkerConfig,
    /// The rest of the team (the worker itself may be included).
    #[serde(default)]
    pub team: Vec<WorkerConfig>,
    /// Absences; records of other workers are ignored.
    #[serde(default)]
    pub absences: Vec<Absence>,
    /// First day of vacation.
    pub start_date: NaiveDate,
    /// Number of calendar days, including the start date.
    pub duration_days: u32,
}

impl VacationCheckRequest {
    /// The requested block.
    pub fn vacation(&self) -> VacationRequest {
        VacationRequest {
            start_date: self.start_date,
            duration_days: self.duration_days,
        }
    }

    /// Checks the worker and the requested duration.
    pub fn validate(&self) -> EngineResult<()> {
        self.worker.validate()?;
        self.vacation().validate()
    }
}
