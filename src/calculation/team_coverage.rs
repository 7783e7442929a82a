//! Team coverage for a single date.
//!
//! Aggregates the on-duty status of every worker in a team by turn and role.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{Absence, WorkTurn, WorkerConfig};

use super::{is_on_duty, resolve_effective_config};

/// Active versus total headcount for one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCoverage {
    /// Workers of the group on duty.
    pub active: u32,
    /// Workers in the group.
    pub total: u32,
    /// Ids of the workers on duty.
    pub worker_ids: Vec<String>,
}

/// Who is on duty on `date`, grouped by turn and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCoverage {
    /// The date the coverage was computed for.
    pub date: NaiveDate,
    /// Ids of every worker on duty, in team order.
    pub on_duty: Vec<String>,
    /// Coverage per turn. Every turn is present.
    pub by_turn: BTreeMap<WorkTurn, GroupCoverage>,
    /// Coverage per role.
    pub by_role: BTreeMap<String, GroupCoverage>,
    /// Workers on duty.
    pub total_active: u32,
    /// Workers in the team.
    pub total_team: u32,
    /// Whole-percent share of the team on duty; 0 for an empty team.
    pub coverage_percent: Decimal,
}

/// Computes team coverage on `date`.
///
/// Role and turn are taken from each worker's effective configuration on
/// `date`, so a promotion recorded in the career history regroups the worker
/// from its effective date.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::team_coverage;
/// use shift_engine::models::{ShiftPattern, WorkTurn, WorkerConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let team = vec![
///     WorkerConfig::new("a", "Nurse", WorkTurn::Night, ShiftPattern::TwelveThirtySix, start),
///     WorkerConfig::new("b", "Nurse", WorkTurn::Night, ShiftPattern::TwelveThirtySix,
///         NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
/// ];
///
/// let coverage = team_coverage(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), &team, &[]);
/// assert_eq!(coverage.on_duty, vec!["a".to_string()]);
/// assert_eq!(coverage.coverage_percent, Decimal::from(50));
/// ```
pub fn team_coverage(date: NaiveDate, workers: &[WorkerConfig], absences: &[Absence]) -> TeamCoverage {
    let mut by_turn: BTreeMap<WorkTurn, GroupCoverage> = WorkTurn::ALL
        .iter()
        .map(|&turn| (turn, GroupCoverage::default()))
        .collect();
    let mut by_role: BTreeMap<String, GroupCoverage> = BTreeMap::new();
    let mut on_duty = Vec::new();

    for worker in workers {
        let effective = resolve_effective_config(date, worker);
        let active = is_on_duty(date, worker, absences);

        let turn = by_turn.entry(effective.turn).or_default();
        let role = by_role.entry(effective.role).or_default();
        turn.total += 1;
        role.total += 1;

        if active {
            turn.active += 1;
            turn.worker_ids.push(worker.id.clone());
            role.active += 1;
            role.worker_ids.push(worker.id.clone());
            on_duty.push(worker.id.clone());
        }
    }

    let total_active = on_duty.len() as u32;
    let total_team = workers.len() as u32;

    TeamCoverage {
        date,
        on_duty,
        by_turn,
        by_role,
        total_active,
        total_team,
        coverage_percent: percent(total_active, total_team),
    }
}

fn percent(part: u32, whole: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
