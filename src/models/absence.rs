//! Recorded absences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review state of an absence record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Awaiting review.
    #[default]
    #[serde(alias = "Pendente")]
    Pending,
    /// Accepted.
    #[serde(alias = "Aprovado")]
    Approved,
    /// Refused.
    #[serde(alias = "Recusado")]
    Rejected,
}

/// A single day a worker was (or will be) absent.
///
/// Absences are kept apart from the worker configuration and are matched by
/// `worker_id`. Every record counts regardless of its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: String,
    /// The worker this absence belongs to.
    pub worker_id: String,
    /// The day of the absence.
    pub date: NaiveDate,
    /// Short reason, e.g. "Medical certificate".
    #[serde(default)]
    pub reason: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Review state.
    #[serde(default)]
    pub status: AbsenceStatus,
}
