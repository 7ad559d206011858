//! Calendar schedule resolution.

pub mod resolver;
pub mod types;

pub use resolver::{parse_calendar_date, resolve, resolve_with, Anchor};
pub use types::{DatedActivity, Schedule, WeekView, WeeklyMileage};
