//! Training plan document model and loading.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{PlanError, PlanResult};
pub use loader::{load_plan_file, parse_plan};
pub use types::{Phase, PhaseKind, PlanSettings, TrainingPlan, Week};
