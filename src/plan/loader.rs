//! Plan document loading.
//!
//! The sheet backend answers either with a plan (`settings` + `phases`) or with
//! an `{"error": "..."}` object. Both are checked before the typed parse so the
//! caller gets a specific reason instead of a generic shape mismatch.

use std::path::Path;

use serde_json::Value;

use crate::plan::error::{PlanError, PlanResult};
use crate::plan::types::TrainingPlan;

/// Sections that must be present for the engine to run at all.
const REQUIRED_SECTIONS: [&str; 2] = ["settings", "phases"];

/// Parse a training plan from JSON text.
pub fn parse_plan(content: &str) -> PlanResult<TrainingPlan> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| PlanError::InvalidJson(e.to_string()))?;

    let object = document
        .as_object()
        .ok_or_else(|| PlanError::InvalidJson("expected a JSON object".to_string()))?;

    if let Some(error) = object.get("error").filter(|v| !v.is_null()) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(PlanError::SourceError(message));
    }

    for section in REQUIRED_SECTIONS {
        if object.get(section).map_or(true, Value::is_null) {
            return Err(PlanError::MissingField(section.to_string()));
        }
    }

    let plan: TrainingPlan =
        serde_json::from_value(document).map_err(|e| PlanError::InvalidJson(e.to_string()))?;

    tracing::debug!(
        "Parsed plan: {} phases, {} weeks, {} days",
        plan.phases.len(),
        plan.total_weeks(),
        plan.total_days()
    );

    Ok(plan)
}

/// Read and parse a training plan from a JSON file.
pub fn load_plan_file(path: &Path) -> PlanResult<TrainingPlan> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PlanError::Io(format!("{}: {}", path.display(), e)))?;
    parse_plan(&content)
}
