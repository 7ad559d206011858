//! Resolved plan context.
//!
//! Everything the views need after a plan load: the plan itself, its dated
//! schedule, the pace table for the chosen baseline and a classified,
//! pace-annotated entry per day. A context is rebuilt from scratch on every
//! load; changing the baseline produces a new context.

use chrono::NaiveDate;
use serde::Serialize;

use crate::activities::{classify, ActivityClassification};
use crate::pace::{pace_for_activity, parse_pace_or_unavailable, PaceTable};
use crate::plan::{parse_plan, PlanResult, TrainingPlan};
use crate::schedule::{resolve_with, DatedActivity, Schedule};
use crate::storage::config::EngineConfig;

/// One scheduled day with its classification and pace target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    /// The dated sheet entry
    pub activity: DatedActivity,
    /// Canonical type and display metadata
    pub classification: ActivityClassification,
    /// Formatted target paces from zone references, empty if none
    pub target_pace: String,
}

/// A resolved training plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanContext {
    plan: TrainingPlan,
    schedule: Schedule,
    pace_table: PaceTable,
    days: Vec<PlanDay>,
}

impl PlanContext {
    /// Resolve a plan with the given configuration.
    ///
    /// Date problems abort the build. A bad baseline pace only blanks the
    /// pace annotations.
    pub fn build(plan: TrainingPlan, config: &EngineConfig) -> PlanResult<Self> {
        let schedule = resolve_with(&plan, config.schedule.anchor)?;

        let baseline = config
            .pace
            .baseline_override
            .as_deref()
            .unwrap_or(&plan.settings.default_baseline_pace);
        tracing::debug!(
            "Baseline pace {:?} ({})",
            baseline,
            if config.pace.baseline_override.is_some() { "override" } else { "plan" }
        );

        let baseline_seconds = parse_pace_or_unavailable(baseline);
        Ok(Self::assemble(plan, schedule, baseline_seconds))
    }

    /// Parse a plan document and resolve it.
    pub fn from_json(json: &str, config: &EngineConfig) -> PlanResult<Self> {
        Self::build(parse_plan(json)?, config)
    }

    /// A copy of this context with pace data recomputed for another baseline.
    pub fn with_baseline_pace(&self, baseline: &str) -> Self {
        let baseline_seconds = parse_pace_or_unavailable(baseline);
        Self::assemble(self.plan.clone(), self.schedule.clone(), baseline_seconds)
    }

    fn assemble(plan: TrainingPlan, schedule: Schedule, baseline_seconds: f64) -> Self {
        let pace_table = PaceTable::build(baseline_seconds);

        let days: Vec<PlanDay> = schedule
            .iter()
            .map(|activity| PlanDay {
                classification: classify(&activity.raw_activity),
                target_pace: pace_for_activity(&activity.raw_activity, baseline_seconds),
                activity: activity.clone(),
            })
            .collect();

        let unknown = days.iter().filter(|d| !d.classification.is_known()).count();
        tracing::debug!(
            "Plan context ready: {} days, {} unclassified, race date {}",
            days.len(),
            unknown,
            schedule.race_date()
        );

        Self {
            plan,
            schedule,
            pace_table,
            days,
        }
    }

    /// The plan as loaded.
    pub fn plan(&self) -> &TrainingPlan {
        &self.plan
    }

    /// Dated schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Date of the last scheduled day.
    pub fn race_date(&self) -> NaiveDate {
        self.schedule.race_date()
    }

    /// Zone and repeat paces for the current baseline.
    pub fn pace_table(&self) -> &PaceTable {
        &self.pace_table
    }

    /// Baseline pace in seconds per kilometer, NaN if unavailable.
    pub fn baseline_seconds(&self) -> f64 {
        self.pace_table.baseline_seconds
    }

    /// All days in date order.
    pub fn days(&self) -> &[PlanDay] {
        &self.days
    }

    /// The day scheduled on `date`, if any.
    pub fn day_on(&self, date: NaiveDate) -> Option<&PlanDay> {
        self.schedule.index_of(date).map(|i| &self.days[i])
    }
}
