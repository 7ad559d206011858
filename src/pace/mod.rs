//! Pace zones, repeat paces and per-activity pace targets.

pub mod format;
pub mod repeats;
pub mod table;
pub mod targets;
pub mod zones;

pub use format::{
    format_duration, format_pace, is_available, parse_pace, parse_pace_or_unavailable,
    PaceError, NOT_AVAILABLE, UNAVAILABLE,
};
pub use repeats::{build_repeat_table, RepeatDistance, RepeatPace, REPEAT_DISTANCES};
pub use table::PaceTable;
pub use targets::{extract_zone_references, pace_for_activity, ZoneReference};
pub use zones::{build_zone_table, PaceKind, PaceZone, Zone, ZONE_FACTORS};
