//! Public holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scope of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Observed nationwide.
    #[serde(alias = "Nacional")]
    National,
    /// Observed in a single state.
    #[serde(alias = "Estadual")]
    State,
}

/// A public holiday.
///
/// Holidays are informational: they annotate calendar days but do not turn a
/// scheduled work day into an off day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// National or state holiday.
    pub kind: HolidayKind,
}
