//! Pace table bundling zone and repeat paces for one baseline.

use serde::Serialize;

use crate::pace::format::{format_pace, is_available, parse_pace_or_unavailable};
use crate::pace::repeats::{build_repeat_table, RepeatPace};
use crate::pace::targets::ZoneReference;
use crate::pace::zones::{build_zone_table, PaceZone, Zone};

/// All paces derived from one baseline, in seconds per kilometer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceTable {
    /// Baseline (LT2) pace, NaN if unavailable
    pub baseline_seconds: f64,
    /// Z1..Z5, easiest first
    pub zones: [PaceZone; 5],
    /// Repeat distances, longest first
    pub repeats: [RepeatPace; 6],
}

impl PaceTable {
    /// Build the zone and repeat tables for a baseline.
    pub fn build(baseline_seconds: f64) -> Self {
        Self {
            baseline_seconds,
            zones: build_zone_table(baseline_seconds),
            repeats: build_repeat_table(baseline_seconds),
        }
    }

    /// Build from an `mm:ss` baseline. A bad string gives an all-`N/A` table.
    pub fn from_pace_str(baseline: &str) -> Self {
        Self::build(parse_pace_or_unavailable(baseline))
    }

    /// Paces of one zone.
    pub fn zone(&self, zone: Zone) -> &PaceZone {
        &self.zones[zone.index()]
    }

    /// Pace in seconds per kilometer for a zone reference.
    pub fn pace_for(&self, reference: ZoneReference) -> f64 {
        self.zone(reference.zone).pace(reference.kind)
    }

    /// Whether the baseline produced real paces.
    pub fn is_available(&self) -> bool {
        is_available(self.baseline_seconds) && self.zones.iter().all(PaceZone::is_available)
    }

    /// Baseline formatted as `m:ss`.
    pub fn baseline_display(&self) -> String {
        format_pace(self.baseline_seconds)
    }
}
