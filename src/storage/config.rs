//! Engine configuration.
//!
//! Stored as TOML under the platform data directory. A missing file means
//! defaults: forward scheduling from the plan start and the plan's own
//! baseline pace.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pace::format::{parse_pace, PaceError};
use crate::schedule::Anchor;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Crate version that wrote the file
    #[serde(default = "current_version")]
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Scheduling settings
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Pace settings
    #[serde(default)]
    pub pace: PaceSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: current_version(),
            data_dir: PathBuf::new(),
            schedule: ScheduleSettings::default(),
            pace: PaceSettings::default(),
        }
    }
}

fn current_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl EngineConfig {
    /// Override the plan's baseline pace. Rejects strings that are not `mm:ss`.
    pub fn set_baseline_override(&mut self, pace: &str) -> Result<(), PaceError> {
        parse_pace(pace)?;
        self.pace.baseline_override = Some(pace.trim().to_string());
        Ok(())
    }

    /// Drop the baseline override and use the plan's pace again.
    pub fn clear_baseline_override(&mut self) {
        self.pace.baseline_override = None;
    }
}

/// Scheduling settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Which end of the plan is pinned to a calendar date
    #[serde(default)]
    pub anchor: Anchor,
}

/// Pace settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaceSettings {
    /// Baseline pace (`mm:ss`) used instead of the plan's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_override: Option<String>,
}

/// Platform data directory for the engine, or `.` when the platform has none.
pub fn get_data_dir() -> PathBuf {
    match directories::ProjectDirs::from("com", "marathonplan", "MarathonPlan") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}

/// `config.toml` inside [`get_data_dir`].
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from `path`. A missing file gives defaults.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!("Failed to read config {}: {}", path.display(), e);
        ConfigError::IoError(e.to_string())
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to the default location.
pub fn save_config(config: &EngineConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &EngineConfig, path: &Path) -> Result<(), ConfigError> {
    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    let io_err = |e: std::io::Error| ConfigError::IoError(format!("{}: {}", path.display(), e));
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)?;

    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    IoError(String),

    /// The file is not valid config TOML
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The config could not be rendered as TOML
    #[error("Serialize error: {0}")]
    SerializeError(String),
}
