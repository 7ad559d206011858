//! Training plan document types.
//!
//! These mirror the JSON produced by the spreadsheet backend. Field names are
//! camelCase on the wire; values authored by hand in the sheet are read
//! leniently (see [`lenient`]).

use serde::{Deserialize, Serialize};

/// A complete training plan as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Plan-wide settings
    pub settings: PlanSettings,
    /// Ordered training phases
    pub phases: Vec<Phase>,
}

impl TrainingPlan {
    /// Total number of scheduled days across all phases and weeks.
    pub fn total_days(&self) -> usize {
        self.phases
            .iter()
            .flat_map(|phase| phase.weeks.iter())
            .map(|week| week.days.len())
            .sum()
    }

    /// Total number of weeks across all phases.
    pub fn total_weeks(&self) -> usize {
        self.phases.iter().map(|phase| phase.weeks.len()).sum()
    }
}

/// Plan-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSettings {
    /// First training day, `YYYY-MM-DD`
    pub plan_start_date: String,
    /// Baseline (LT2) pace, `mm:ss` per km
    #[serde(default)]
    pub default_baseline_pace: String,
    /// Race distance in kilometers
    #[serde(default)]
    pub race_distance_km: f64,
    /// Race day, `YYYY-MM-DD`; only consulted when anchoring on the race date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_date: Option<String>,
    /// Display name of the target race
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_name: Option<String>,
}

/// A training phase (base, specific, taper, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase name as written in the sheet
    pub name: String,
    /// Free-text goal of the phase
    #[serde(default)]
    pub goal: String,
    /// Ordered weeks of the phase
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Phase {
    /// Classify the phase by its name.
    pub fn kind(&self) -> PhaseKind {
        PhaseKind::from_name(&self.name)
    }

    /// Number of scheduled days in this phase.
    pub fn total_days(&self) -> usize {
        self.weeks.iter().map(|week| week.days.len()).sum()
    }
}

/// A single training week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// Week number as shown in the plan
    #[serde(deserialize_with = "lenient::week_num")]
    pub week_num: u32,
    /// Weekly volume, free text (e.g. "45 km")
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_km: String,
    /// Coach notes for the week
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
    /// One raw activity line per day
    #[serde(default, deserialize_with = "lenient::days")]
    pub days: Vec<String>,
}

impl Week {
    /// First number found in the free-text weekly volume.
    ///
    /// `"45 km"` gives 45, `"40-45km"` gives 40, `"52.5"` gives 52.5.
    pub fn total_km_value(&self) -> Option<f64> {
        let start = self.total_km.find(|c: char| c.is_ascii_digit())?;
        let number: String = self.total_km[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        number.trim_end_matches('.').parse().ok()
    }
}

/// Broad category of a training phase, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// General preparation before the plan proper
    Preseason,
    /// Aerobic base building
    Base,
    /// Race-specific work
    Specific,
    /// Volume reduction before race day
    Taper,
    /// Anything not recognized
    Other,
}

impl PhaseKind {
    /// Classify a phase by keywords in its name.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("pre-season") || name.contains("preseason") || name.contains("pre season")
        {
            PhaseKind::Preseason
        } else if name.contains("taper") {
            PhaseKind::Taper
        } else if name.contains("base") {
            PhaseKind::Base
        } else if name.contains("specific") || name.contains("peak") || name.contains("build") {
            PhaseKind::Specific
        } else {
            PhaseKind::Other
        }
    }

    /// Style key for the phase, empty for [`PhaseKind::Other`].
    pub fn style_key(&self) -> &'static str {
        match self {
            PhaseKind::Preseason => "phase-preseason",
            PhaseKind::Base => "phase-base",
            PhaseKind::Specific => "phase-specific",
            PhaseKind::Taper => "phase-taper",
            PhaseKind::Other => "",
        }
    }
}

/// Deserializers tolerant of hand-authored sheet cells.
mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Week numbers may arrive as `3`, `3.0` or `"3"`.
    pub fn week_num<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| D::Error::custom(format!("invalid week number: {}", n))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid week number: {:?}", s))),
            other => Err(D::Error::custom(format!("invalid week number: {}", other))),
        }
    }

    /// Text cells: `null` becomes empty, numbers keep their JSON text.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(cell_to_string(Value::deserialize(deserializer)?))
    }

    /// Day cells, one per scheduled day.
    pub fn days<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(cells) => Ok(cells.into_iter().map(cell_to_string).collect()),
            Value::Null => Ok(Vec::new()),
            other => Err(D::Error::custom(format!("expected a list of days, got {}", other))),
        }
    }

    /// Scalars keep their text; `null`, objects and arrays carry no activity.
    fn cell_to_string(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Object(_) | Value::Array(_) => String::new(),
        }
    }
}
