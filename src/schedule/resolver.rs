//! Date assignment for the flattened plan.
//!
//! The plan sheet lists days in order without dates. The resolver flattens
//! phases, weeks and days and gives each day a consecutive calendar date.
//! All arithmetic is on [`NaiveDate`], so there is no timezone or DST drift.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plan::{PlanError, PlanResult, TrainingPlan};
use crate::schedule::types::{DatedActivity, Schedule, WeeklyMileage};

/// Calendar date format used by the plan sheet.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which end of the plan is pinned to a fixed date.
///
/// Both anchors give the same dates for an unedited plan. They differ when
/// days are inserted or removed: `PlanStart` shifts every later date,
/// `RaceDate` shifts every earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Walk forward from `settings.planStartDate`
    #[default]
    PlanStart,
    /// Walk backward from `settings.raceDate`
    RaceDate,
}

/// Parse a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Resolve the plan into a dated schedule, anchored on the plan start date.
pub fn resolve(plan: &TrainingPlan) -> PlanResult<Schedule> {
    resolve_with(plan, Anchor::PlanStart)
}

/// Resolve the plan into a dated schedule using the given anchor.
pub fn resolve_with(plan: &TrainingPlan, anchor: Anchor) -> PlanResult<Schedule> {
    let total_days = plan.total_days();

    let start_date = match anchor {
        Anchor::PlanStart => {
            let raw = &plan.settings.plan_start_date;
            let start = parse_calendar_date(raw)
                .ok_or_else(|| PlanError::InvalidStartDate(raw.clone()))?;
            if total_days == 0 {
                return Err(PlanError::EmptyPlan);
            }
            start
        }
        Anchor::RaceDate => {
            let raw = plan.settings.race_date.clone().unwrap_or_default();
            let race = parse_calendar_date(&raw).ok_or(PlanError::InvalidRaceDate(raw))?;
            if total_days == 0 {
                return Err(PlanError::EmptyPlan);
            }
            race.checked_sub_days(Days::new(total_days as u64 - 1))
                .ok_or(PlanError::DateOutOfRange)?
        }
    };

    let mut days = Vec::with_capacity(total_days);
    let mut mileage = Vec::with_capacity(plan.total_weeks());

    for (phase_index, phase) in plan.phases.iter().enumerate() {
        for (week_index, week) in phase.weeks.iter().enumerate() {
            mileage.push(WeeklyMileage {
                phase_name: phase.name.clone(),
                week_num: week.week_num,
                km: week.total_km_value(),
            });

            for raw_activity in &week.days {
                let day_index = days.len();
                let date = start_date
                    .checked_add_days(Days::new(day_index as u64))
                    .ok_or(PlanError::DateOutOfRange)?;

                days.push(DatedActivity {
                    date,
                    raw_activity: raw_activity.clone(),
                    phase_name: phase.name.clone(),
                    week_num: week.week_num,
                    week_notes: week.notes.clone(),
                    week_total_km: week.total_km.clone(),
                    day_index,
                    phase_index,
                    week_index,
                });
            }
        }
    }

    // total_days >= 1 was checked above, so the last entry exists.
    let race_date = days.last().map(|d| d.date).ok_or(PlanError::EmptyPlan)?;

    tracing::debug!(
        "Resolved {} days ({:?} anchor): {} to {}",
        days.len(),
        anchor,
        start_date,
        race_date
    );

    Ok(Schedule::new(start_date, race_date, days, mileage))
}
