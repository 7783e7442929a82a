//! Calculation logic for the shift engine.
//!
//! The core is the effective-configuration resolver and the work-day
//! predicate built on it. Everything else in this module combines the
//! predicate with a worker's vacation, overtime and absence records: day
//! status, consecutive-day streaks, monthly totals, team coverage and
//! vacation planning.

mod day_status;
mod effective_config;
mod month_summary;
mod streak;
mod team_coverage;
mod vacation;
mod work_day;

pub use day_status::{
    DayStatus, day_status, is_absence_day, is_on_duty, is_overtime_day, is_vacation_day,
};
pub use effective_config::resolve_effective_config;
pub use month_summary::{MonthSummary, month_summary};
pub use streak::{WorkStreak, work_streak};
pub use team_coverage::{GroupCoverage, TeamCoverage, team_coverage};
pub use vacation::{
    MAX_VACATION_DAYS, PeerConflict, SUGGESTION_WINDOW_DAYS, VacationCheck, VacationPeriod, VacationRequest,
    check_vacation_request, suggest_vacation_start, vacation_periods,
};
pub use work_day::{
    calendar_day_difference, evaluate_pattern, is_work_day, is_work_day_str, parse_date,
};
