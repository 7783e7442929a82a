//! Shift pattern and work turn enumerations.
//!
//! Persisted data carries the application's own labels (`"5x2"`,
//! `"Revezamento"`, `"Manhã"`, ...). Both those labels and the snake_case
//! variant names are accepted when deserializing; serialization always emits
//! snake_case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The rule family used to decide whether a date is a work day.
///
/// The set is closed: a single evaluator switches on the variant.
/// [`ShiftPattern::Unrecognized`] absorbs any label this crate does not know
/// so that stale or foreign data still loads; it is evaluated fail-open.
///
/// # Example
///
/// ```
/// use shift_engine::models::ShiftPattern;
///
/// let pattern: ShiftPattern = serde_json::from_str("\"12x36\"").unwrap();
/// assert_eq!(pattern, ShiftPattern::TwelveThirtySix);
///
/// let unknown: ShiftPattern = serde_json::from_str("\"4x3\"").unwrap();
/// assert_eq!(unknown, ShiftPattern::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftPattern {
    /// Monday through Friday.
    FixedFiveTwo,
    /// Monday through Saturday.
    FixedSixOne,
    /// Alternating days (12 hours on, 36 hours off) anchored at the cycle start.
    TwelveThirtySix,
    /// N days on, M days off, anchored at the cycle start.
    Rotating,
    /// Every weekday except a configurable set of fixed off weekdays.
    Flexible,
    /// A label this crate does not recognize.
    Unrecognized,
}

impl ShiftPattern {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftPattern::FixedFiveTwo => "fixed_five_two",
            ShiftPattern::FixedSixOne => "fixed_six_one",
            ShiftPattern::TwelveThirtySix => "twelve_thirty_six",
            ShiftPattern::Rotating => "rotating",
            ShiftPattern::Flexible => "flexible",
            ShiftPattern::Unrecognized => "unrecognized",
        }
    }
}

impl FromStr for ShiftPattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "fixed_five_two" | "5x2" => ShiftPattern::FixedFiveTwo,
            "fixed_six_one" | "6x1" => ShiftPattern::FixedSixOne,
            "twelve_thirty_six" | "12x36" => ShiftPattern::TwelveThirtySix,
            "rotating" | "Revezamento" => ShiftPattern::Rotating,
            "flexible" | "Flexível" | "Flexivel" => ShiftPattern::Flexible,
            _ => ShiftPattern::Unrecognized,
        })
    }
}

impl From<String> for ShiftPattern {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(ShiftPattern::Unrecognized)
    }
}

impl From<ShiftPattern> for String {
    fn from(value: ShiftPattern) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ShiftPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShiftPattern::FixedFiveTwo => "5x2",
            ShiftPattern::FixedSixOne => "6x1",
            ShiftPattern::TwelveThirtySix => "12x36",
            ShiftPattern::Rotating => "Rotating",
            ShiftPattern::Flexible => "Flexible",
            ShiftPattern::Unrecognized => "Unrecognized",
        };
        write!(f, "{}", label)
    }
}

/// The part of the day a worker is rostered on.
///
/// Descriptive only; it never affects the work-day predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkTurn {
    /// Morning turn.
    #[serde(alias = "Manhã")]
    Morning,
    /// Afternoon turn.
    #[serde(alias = "Tarde")]
    Afternoon,
    /// Night turn.
    #[serde(alias = "Noite")]
    Night,
}

impl WorkTurn {
    /// All turns, in roster order.
    pub const ALL: [WorkTurn; 3] = [WorkTurn::Morning, WorkTurn::Afternoon, WorkTurn::Night];
}

impl fmt::Display for WorkTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkTurn::Morning => write!(f, "Morning"),
            WorkTurn::Afternoon => write!(f, "Afternoon"),
            WorkTurn::Night => write!(f, "Night"),
        }
    }
}
