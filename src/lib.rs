//! Marathon Plan - training plan resolution engine
//!
//! Turns a spreadsheet-authored marathon plan into a dated day-by-day
//! schedule, classifies each day's free-text activity into a canonical type,
//! and derives zone, repeat and per-session target paces from a single
//! baseline pace.

pub mod activities;
pub mod context;
pub mod pace;
pub mod plan;
pub mod schedule;
pub mod storage;

// Re-export commonly used types
pub use activities::{classify, ActivityClassification, ActivityType};
pub use context::{PlanContext, PlanDay};
pub use pace::{PaceTable, Zone};
pub use plan::{parse_plan, PlanError, TrainingPlan};
pub use schedule::{resolve, Anchor, DatedActivity, Schedule};
pub use storage::config::EngineConfig;
