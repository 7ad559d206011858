//! Zone references embedded in activity text, e.g. `"6x400m @ Z5 (High)"`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::pace::format::format_pace;
use crate::pace::zones::{build_zone_table, usable_baseline, PaceKind, Zone};

static ZONE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bZ(\d+)\s*\(\s*(low|average|avg|high)\s*\)")
        .expect("zone reference pattern is valid")
});

/// A `<Zn> (<kind>)` target found in an activity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZoneReference {
    /// Referenced zone
    pub zone: Zone,
    /// Point of the zone the session targets
    pub kind: PaceKind,
}

impl ZoneReference {
    /// Create a reference to one point of a zone.
    pub fn new(zone: Zone, kind: PaceKind) -> Self {
        Self { zone, kind }
    }
}

/// Zone references in order of appearance. Zones outside Z1-Z5 are skipped.
pub fn extract_zone_references(raw: &str) -> Vec<ZoneReference> {
    ZONE_REFERENCE
        .captures_iter(raw)
        .filter_map(|caps| {
            let zone = caps[1].parse::<u32>().ok().and_then(Zone::from_number)?;
            let kind = PaceKind::parse(&caps[2])?;
            Some(ZoneReference { zone, kind })
        })
        .collect()
}

/// Target paces prescribed by an activity line, joined with `" - "`.
///
/// Empty when the line has no zone references or the baseline is unusable.
pub fn pace_for_activity(raw: &str, baseline_seconds: f64) -> String {
    if usable_baseline(baseline_seconds).is_none() {
        return String::new();
    }

    let references = extract_zone_references(raw);
    if references.is_empty() {
        return String::new();
    }

    let zones = build_zone_table(baseline_seconds);
    references
        .iter()
        .map(|r| format_pace(zones[r.zone.index()].pace(r.kind)))
        .collect::<Vec<_>>()
        .join(" - ")
}
