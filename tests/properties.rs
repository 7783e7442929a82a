//! Property tests for the work-day predicate.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use shift_engine::calculation::{
    calendar_day_difference, is_work_day, is_work_day_str, resolve_effective_config,
};
use shift_engine::models::{CareerChange, ShiftPattern, WorkTurn, WorkerConfig};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Any date between 2000 and roughly 2054.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| base_date() + Duration::days(offset))
}

fn any_pattern() -> impl Strategy<Value = ShiftPattern> {
    prop_oneof![
        Just(ShiftPattern::FixedFiveTwo),
        Just(ShiftPattern::FixedSixOne),
        Just(ShiftPattern::TwelveThirtySix),
        Just(ShiftPattern::Rotating),
        Just(ShiftPattern::Flexible),
        Just(ShiftPattern::Unrecognized),
    ]
}

fn worker(pattern: ShiftPattern, start: NaiveDate) -> WorkerConfig {
    WorkerConfig::new("w_prop", "Nurse", WorkTurn::Morning, pattern, start)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

proptest! {
    #[test]
    fn prop_never_works_before_start(
        pattern in any_pattern(),
        start in any_date(),
        days_before in 1i64..2_000,
    ) {
        let worker = worker(pattern, start);
        prop_assert!(!is_work_day(start - Duration::days(days_before), &worker));
    }

    #[test]
    fn prop_five_two_is_monday_to_friday(offset in 0i64..20_000) {
        let worker = worker(ShiftPattern::FixedFiveTwo, base_date());
        let date = base_date() + Duration::days(offset);
        prop_assert_eq!(is_work_day(date, &worker), !is_weekend(date));
    }

    #[test]
    fn prop_six_one_is_monday_to_saturday(offset in 0i64..20_000) {
        let worker = worker(ShiftPattern::FixedSixOne, base_date());
        let date = base_date() + Duration::days(offset);
        prop_assert_eq!(is_work_day(date, &worker), date.weekday() != Weekday::Sun);
    }

    #[test]
    fn prop_twelve_thirty_six_alternates(start in any_date(), offset in 0i64..5_000) {
        let worker = worker(ShiftPattern::TwelveThirtySix, start);
        let date = start + Duration::days(offset);
        prop_assert_eq!(is_work_day(date, &worker), offset % 2 == 0);
        prop_assert_ne!(is_work_day(date, &worker), is_work_day(date + Duration::days(1), &worker));
    }

    #[test]
    fn prop_rotating_follows_cadence(
        start in any_date(),
        work in 1u32..10,
        off in 1u32..10,
        offset in 0i64..5_000,
    ) {
        let mut worker = worker(ShiftPattern::Rotating, start);
        worker.rotating_work_days = Some(work);
        worker.rotating_off_days = Some(off);

        let date = start + Duration::days(offset);
        let cycle = i64::from(work + off);
        prop_assert_eq!(is_work_day(date, &worker), offset % cycle < i64::from(work));
        prop_assert_eq!(
            is_work_day(date, &worker),
            is_work_day(date + Duration::days(cycle), &worker)
        );
    }

    #[test]
    fn prop_rotating_default_is_five_in_six(start in any_date(), window in 0i64..1_000) {
        let worker = worker(ShiftPattern::Rotating, start);
        let first = start + Duration::days(window * 6);
        let worked = first
            .iter_days()
            .take(6)
            .filter(|d| is_work_day(*d, &worker))
            .count();
        prop_assert_eq!(worked, 5);
    }

    #[test]
    fn prop_flexible_weekend_off_matches_five_two(start in any_date(), offset in 0i64..5_000) {
        let mut flexible = worker(ShiftPattern::Flexible, start);
        flexible.fixed_off_weekdays = vec![0, 6];
        let five_two = worker(ShiftPattern::FixedFiveTwo, start);

        let date = start + Duration::days(offset);
        prop_assert_eq!(is_work_day(date, &flexible), is_work_day(date, &five_two));
    }

    #[test]
    fn prop_unrecognized_pattern_fails_open(start in any_date(), offset in 0i64..5_000) {
        let worker = worker(ShiftPattern::Unrecognized, start);
        prop_assert!(is_work_day(start + Duration::days(offset), &worker));
    }

    #[test]
    fn prop_evaluation_is_idempotent(pattern in any_pattern(), start in any_date(), date in any_date()) {
        let worker = worker(pattern, start);
        let first = is_work_day(date, &worker);
        let second = is_work_day(date, &worker);
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            resolve_effective_config(date, &worker),
            resolve_effective_config(date, &worker)
        );
    }

    #[test]
    fn prop_history_order_does_not_matter(
        start in any_date(),
        first_gap in 1i64..400,
        second_gap in 1i64..400,
        probe in 0i64..1_200,
    ) {
        let first = CareerChange {
            effective_date: start + Duration::days(first_gap),
            shift_pattern: Some(ShiftPattern::Rotating),
            rotating_work_days: Some(4),
            rotating_off_days: Some(2),
            ..CareerChange::default()
        };
        let second = CareerChange {
            effective_date: first.effective_date + Duration::days(second_gap),
            shift_pattern: Some(ShiftPattern::TwelveThirtySix),
            ..CareerChange::default()
        };

        let mut in_order = worker(ShiftPattern::FixedFiveTwo, start);
        in_order.change_history = vec![first.clone(), second.clone()];
        let mut reversed = in_order.clone();
        reversed.change_history = vec![second, first];

        let date = start + Duration::days(probe);
        prop_assert_eq!(is_work_day(date, &in_order), is_work_day(date, &reversed));
    }

    #[test]
    fn prop_change_anchor_is_always_a_work_day(start in any_date(), gap in 1i64..2_000) {
        let mut worker = worker(ShiftPattern::TwelveThirtySix, start);
        let effective_date = start + Duration::days(gap);
        worker.change_history.push(CareerChange {
            effective_date,
            shift_pattern: Some(ShiftPattern::Rotating),
            rotating_work_days: Some(4),
            rotating_off_days: Some(2),
            ..CareerChange::default()
        });

        prop_assert!(is_work_day(effective_date, &worker));
        prop_assert_eq!(
            resolve_effective_config(effective_date, &worker).cycle_start_date,
            effective_date
        );
    }

    #[test]
    fn prop_garbage_strings_are_not_work_days(input in "[a-zA-Z /:.]{0,20}") {
        let worker = worker(ShiftPattern::Unrecognized, base_date());
        prop_assert!(!is_work_day_str(&input, &worker));
    }

    #[test]
    fn prop_string_and_date_forms_agree(pattern in any_pattern(), start in any_date(), date in any_date()) {
        let worker = worker(pattern, start);
        let formatted = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(is_work_day_str(&formatted, &worker), is_work_day(date, &worker));
    }

    #[test]
    fn prop_day_difference_is_exact(from in any_date(), offset in -5_000i64..5_000) {
        prop_assert_eq!(calendar_day_difference(from + Duration::days(offset), from), offset);
    }
}
