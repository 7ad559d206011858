//! Integration tests for plan loading through the resolved context.
//!
//! Covers the full path from the sheet's JSON document to dated,
//! classified and pace-annotated days:
//! - Loading the fixture from disk and from a string
//! - Rejecting documents the sheet backend marks as errors
//! - Degrading pace output when the baseline is unusable

use std::io::Write;

use chrono::NaiveDate;
use marathon_plan::activities::ActivityType;
use marathon_plan::context::PlanContext;
use marathon_plan::pace::{format_pace, Zone};
use marathon_plan::plan::{load_plan_file, PlanError};
use marathon_plan::schedule::Anchor;
use marathon_plan::storage::config::EngineConfig;
use tempfile::NamedTempFile;

use crate::init_tracing;

const SAMPLE_PLAN: &str = include_str!("../fixtures/sample_plan.json");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_context() -> PlanContext {
    init_tracing();
    PlanContext::from_json(SAMPLE_PLAN, &EngineConfig::default()).unwrap()
}

#[test]
fn test_sample_plan_resolves_to_race_day() {
    let ctx = sample_context();

    assert_eq!(ctx.days().len(), 112);
    assert_eq!(ctx.plan().phases.len(), 3);
    assert_eq!(ctx.race_date(), date(2025, 4, 27));

    let race = ctx.day_on(date(2025, 4, 27)).unwrap();
    assert_eq!(race.classification.canonical_type, ActivityType::Race);
}

#[test]
fn test_every_sample_day_is_classified() {
    let ctx = sample_context();
    for day in ctx.days() {
        assert!(
            day.classification.is_known(),
            "unclassified: {:?}",
            day.activity.raw_activity
        );
    }
}

#[test]
fn test_target_paces_follow_zone_references() {
    let ctx = sample_context();

    // Day 2 of week 7: "Intervals: 6x800m @ Z5 (High)"
    let intervals = ctx.day_on(date(2025, 2, 18)).unwrap();
    assert_eq!(intervals.classification.canonical_type, ActivityType::Interval);
    assert_eq!(intervals.target_pace, "4:09");

    // Day 1 of week 1: "Easy: 8km conversational"
    let easy = ctx.day_on(date(2025, 1, 6)).unwrap();
    assert_eq!(easy.target_pace, "");

    let z4 = ctx.pace_table().zone(Zone::Z4);
    assert_eq!(format_pace(z4.average), "4:46");
}

#[test]
fn test_changing_baseline_keeps_schedule() {
    let ctx = sample_context();
    let faster = ctx.with_baseline_pace("4:30");

    assert_eq!(faster.baseline_seconds(), 270.0);
    assert_eq!(faster.schedule(), ctx.schedule());
    assert_eq!(format_pace(faster.pace_table().zone(Zone::Z4).low), "4:30");

    let broken = ctx.with_baseline_pace("abc");
    assert!(!broken.pace_table().is_available());
    assert!(broken.days().iter().all(|d| d.target_pace.is_empty()));
    assert_eq!(broken.days().len(), 112);
}

#[test]
fn test_race_date_anchor_on_sample() {
    init_tracing();
    let mut config = EngineConfig::default();
    config.schedule.anchor = Anchor::RaceDate;

    let ctx = PlanContext::from_json(SAMPLE_PLAN, &config).unwrap();
    assert_eq!(ctx.schedule().start_date(), date(2025, 1, 6));
}

#[test]
fn test_load_plan_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_PLAN.as_bytes()).unwrap();

    let plan = load_plan_file(file.path()).unwrap();
    assert_eq!(plan.total_days(), 112);
    assert_eq!(plan.settings.race_name.as_deref(), Some("Spring Marathon"));
}

#[test]
fn test_source_error_document() {
    let result = PlanContext::from_json(
        r#"{"error": "Sheet not shared"}"#,
        &EngineConfig::default(),
    );
    assert!(matches!(result, Err(PlanError::SourceError(msg)) if msg == "Sheet not shared"));
}

#[test]
fn test_missing_sections() {
    let result = PlanContext::from_json(r#"{"settings": {}}"#, &EngineConfig::default());
    assert!(matches!(result, Err(PlanError::MissingField(field)) if field == "phases"));
}

#[test]
fn test_plan_context_serializes() {
    let ctx = sample_context();
    let json = serde_json::to_value(&ctx).unwrap();

    let first = &json["days"][0];
    assert_eq!(first["activity"]["date"], "2025-01-06");
    assert_eq!(first["activity"]["rawActivity"], "Easy: 8km conversational");
    assert_eq!(first["activity"]["phaseName"], "Base");
    assert_eq!(first["activity"]["weekTotalKm"], "45");
    assert_eq!(first["targetPace"], "");
    assert_eq!(json["schedule"]["raceDate"], "2025-04-27");
    assert_eq!(json["schedule"]["mileage"][0]["weekNum"], 1);
    assert_eq!(first["classification"]["canonicalType"], "easy");
    assert_eq!(json["paceTable"]["zones"][3]["name"], "Z4");
}

#[test]
fn test_structured_day_cells_are_unknown() {
    let json = r#"{
        "settings": {"planStartDate": "2025-01-06", "defaultBaselinePace": "5:00", "raceDistanceKm": 42.2},
        "phases": [{"name": "Base", "goal": "", "weeks": [
            {"weekNum": 1, "totalKm": "10", "notes": "", "days": [{"type": "tempo"}, ["easy"], "Easy: 5km"]}
        ]}]
    }"#;
    let ctx = PlanContext::from_json(json, &EngineConfig::default()).unwrap();

    let types: Vec<_> = ctx.days().iter().map(|d| d.classification.canonical_type).collect();
    assert_eq!(types, [ActivityType::Unknown, ActivityType::Unknown, ActivityType::Easy]);
}
