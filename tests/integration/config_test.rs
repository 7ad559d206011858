//! Integration tests for configuration persistence.

use marathon_plan::context::PlanContext;
use marathon_plan::schedule::Anchor;
use marathon_plan::storage::config::{load_config_from, save_config_to, ConfigError, EngineConfig};
use tempfile::tempdir;

use crate::init_tracing;

const SAMPLE_PLAN: &str = include_str!("../fixtures/sample_plan.json");

#[test]
fn test_missing_file_gives_defaults() {
    init_tracing();
    let dir = tempdir().unwrap();

    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.schedule.anchor, Anchor::PlanStart);
    assert!(config.pace.baseline_override.is_none());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = EngineConfig::default();
    config.schedule.anchor = Anchor::RaceDate;
    config.set_baseline_override("4:15").unwrap();

    save_config_to(&config, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("anchor = \"race_date\""));
    assert!(content.contains("baseline_override = \"4:15\""));

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[schedule]\nanchor = \"sideways\"\n").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_override_from_config_drives_paces() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "version = \"0.1.0\"\n\n[pace]\nbaseline_override = \"4:00\"\n",
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let ctx = PlanContext::from_json(SAMPLE_PLAN, &config).unwrap();
    assert_eq!(ctx.baseline_seconds(), 240.0);
}
