//! Effective-configuration resolution.
//!
//! Replays a worker's career history up to a target date to find the
//! configuration in force on that date.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{CareerChange, EffectiveConfig, WorkerConfig};

/// Resolves the configuration in force on `target_date`.
///
/// Starts from the base configuration and applies, in ascending
/// `effective_date` order, every history entry effective on or before
/// `target_date`. Entries sharing a date are applied in their original
/// order, so the later one wins for overlapping fields.
///
/// An entry that changes the shift pattern or either rotating cadence
/// (compared with the values accumulated so far) moves the cycle anchor to
/// its own effective date, restarting cycle-based patterns there.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::resolve_effective_config;
/// use shift_engine::models::{CareerChange, ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
///
/// let date = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// let mut worker = WorkerConfig::new(
///     "w1", "Nurse", WorkTurn::Night, ShiftPattern::TwelveThirtySix, date("2024-01-01"),
/// );
/// worker.change_history.push(CareerChange {
///     effective_date: date("2024-06-01"),
///     shift_pattern: Some(ShiftPattern::Rotating),
///     rotating_work_days: Some(4),
///     rotating_off_days: Some(2),
///     ..CareerChange::default()
/// });
///
/// let before = resolve_effective_config(date("2024-05-31"), &worker);
/// assert_eq!(before.shift_pattern, ShiftPattern::TwelveThirtySix);
///
/// let after = resolve_effective_config(date("2024-06-01"), &worker);
/// assert_eq!(after.shift_pattern, ShiftPattern::Rotating);
/// assert_eq!(after.cycle_start_date, date("2024-06-01"));
/// ```
pub fn resolve_effective_config(target_date: NaiveDate, worker: &WorkerConfig) -> EffectiveConfig {
    let mut effective = EffectiveConfig::from(worker);

    if worker.change_history.is_empty() {
        return effective;
    }

    // sort_by_key is stable: same-day entries keep their insertion order
    let mut history: Vec<&CareerChange> = worker.change_history.iter().collect();
    history.sort_by_key(|change| change.effective_date);

    for change in history
        .into_iter()
        .take_while(|change| change.effective_date <= target_date)
    {
        apply_change(&mut effective, change);
    }

    effective
}

/// Returns true if `change` alters the pattern or cadence currently in force.
fn is_pattern_affecting(effective: &EffectiveConfig, change: &CareerChange) -> bool {
    let pattern_changed = change
        .shift_pattern
        .is_some_and(|pattern| pattern != effective.shift_pattern);
    let work_changed = change
        .rotating_work_days
        .is_some_and(|days| Some(days) != effective.rotating_work_days);
    let off_changed = change
        .rotating_off_days
        .is_some_and(|days| Some(days) != effective.rotating_off_days);

    pattern_changed || work_changed || off_changed
}

fn apply_change(effective: &mut EffectiveConfig, change: &CareerChange) {
    if is_pattern_affecting(effective, change) {
        debug!(
            effective_date = %change.effective_date,
            previous_anchor = %effective.cycle_start_date,
            "Resynchronizing cycle anchor"
        );
        effective.cycle_start_date = change.effective_date;
    }

    if let Some(pattern) = change.shift_pattern {
        effective.shift_pattern = pattern;
    }
    if let Some(weekdays) = &change.fixed_off_weekdays {
        effective.fixed_off_weekdays = weekdays.clone();
    }
    if let Some(days) = change.rotating_work_days {
        effective.rotating_work_days = Some(days);
    }
    if let Some(days) = change.rotating_off_days {
        effective.rotating_off_days = Some(days);
    }
    if let Some(role) = change.role.as_deref().filter(|r| !r.trim().is_empty()) {
        effective.role = role.to_string();
    }
    if let Some(turn) = change.turn {
        effective.turn = turn;
    }
}
