//! Unit tests for schedule resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use marathon_plan::plan::{Phase, PlanError, PlanSettings, TrainingPlan, Week};
use marathon_plan::schedule::{resolve, resolve_with, Anchor};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn week(num: u32) -> Week {
    Week {
        week_num: num,
        total_km: format!("{} km", 40 + num),
        notes: format!("Week {num} notes"),
        days: (1..=7).map(|d| format!("Easy: {d}km")).collect(),
    }
}

/// Three phases of 6, 7 and 3 weeks: 112 days.
fn sixteen_week_plan(start: &str) -> TrainingPlan {
    let phase = |name: &str, nums: std::ops::RangeInclusive<u32>| Phase {
        name: name.to_string(),
        goal: String::new(),
        weeks: nums.map(week).collect(),
    };

    TrainingPlan {
        settings: PlanSettings {
            plan_start_date: start.to_string(),
            default_baseline_pace: "5:00".to_string(),
            race_distance_km: 42.195,
            race_date: Some("2025-04-27".to_string()),
            race_name: None,
        },
        phases: vec![
            phase("Base", 1..=6),
            phase("Specific", 7..=13),
            phase("Taper", 14..=16),
        ],
    }
}

#[test]
fn test_sixteen_week_plan_ends_on_race_day() {
    let plan = sixteen_week_plan("2025-01-06");
    let schedule = resolve(&plan).unwrap();

    assert_eq!(schedule.len(), 112);
    assert_eq!(schedule.start_date(), date(2025, 1, 6));
    assert_eq!(schedule.days().last().unwrap().date, date(2025, 4, 27));
    assert_eq!(schedule.race_date(), date(2025, 4, 27));
    assert_eq!(schedule.race_date().weekday(), Weekday::Sun);
}

#[test]
fn test_dates_are_consecutive() {
    let schedule = resolve(&sixteen_week_plan("2025-01-06")).unwrap();

    for (i, day) in schedule.iter().enumerate() {
        assert_eq!(day.day_index, i);
        assert_eq!((day.date - schedule.start_date()).num_days(), i as i64);
    }
    for pair in schedule.days().windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_days_carry_owning_week() {
    let schedule = resolve(&sixteen_week_plan("2025-01-06")).unwrap();

    let day = schedule.activity_on(date(2025, 2, 17)).unwrap();
    assert_eq!(day.phase_name, "Specific");
    assert_eq!(day.week_num, 7);
    assert_eq!(day.week_notes, "Week 7 notes");
    assert_eq!(day.raw_activity, "Easy: 1km");
    assert_eq!((day.phase_index, day.week_index), (1, 0));

    assert!(schedule.activity_on(date(2025, 1, 5)).is_none());
    assert!(schedule.activity_on(date(2025, 4, 28)).is_none());
}

#[test]
fn test_race_date_anchor_matches_forward_dates() {
    let plan = sixteen_week_plan("2025-01-06");
    let forward = resolve(&plan).unwrap();
    let backward = resolve_with(&plan, Anchor::RaceDate).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_race_date_anchor_ignores_start_date() {
    let plan = sixteen_week_plan("not a date");
    assert!(matches!(resolve(&plan), Err(PlanError::InvalidStartDate(_))));

    let schedule = resolve_with(&plan, Anchor::RaceDate).unwrap();
    assert_eq!(schedule.start_date(), date(2025, 1, 6));
}

#[test]
fn test_week_view_over_partial_week() {
    let schedule = resolve(&sixteen_week_plan("2025-01-08")).unwrap();

    // Wednesday start: Monday and Tuesday of the first week are empty.
    let view = schedule.week_containing(date(2025, 1, 10));
    assert_eq!(view.monday, date(2025, 1, 6));
    assert!(view.days[0].is_none());
    assert!(view.days[1].is_none());
    assert_eq!(view.scheduled_count(), 5);
    assert_eq!(view.notes, Some("Week 1 notes"));
}

#[test]
fn test_days_until_race() {
    let schedule = resolve(&sixteen_week_plan("2025-01-06")).unwrap();
    assert_eq!(schedule.days_until_race(date(2025, 4, 20)), 7);
    assert_eq!(schedule.days_until_race(date(2025, 4, 28)), -1);
    assert!(schedule.is_race_day(date(2025, 4, 27)));
}

#[test]
fn test_weekly_mileage() {
    let schedule = resolve(&sixteen_week_plan("2025-01-06")).unwrap();
    let mileage = schedule.weekly_mileage();

    assert_eq!(mileage.len(), 16);
    assert_eq!(mileage[0].km, Some(41.0));
    assert_eq!(mileage[15].phase_name, "Taper");
}
