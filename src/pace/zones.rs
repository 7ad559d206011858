//! Pace zones derived from the baseline (LT2) pace.
//!
//! Each zone is a band between two multiples of the baseline. Zones run from
//! Z1 (easiest, slowest, largest factors) to Z5 (hardest, fastest, smallest
//! factors); within a zone `low` is the slower edge and `high` the faster.

use serde::{Deserialize, Serialize};

use crate::pace::format::{format_pace, is_available, UNAVAILABLE};

/// Training zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
}

impl Zone {
    /// All zones, easiest first.
    pub const ALL: [Zone; 5] = [Zone::Z1, Zone::Z2, Zone::Z3, Zone::Z4, Zone::Z5];

    /// Zone from its number (1-5).
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Zone::Z1),
            2 => Some(Zone::Z2),
            3 => Some(Zone::Z3),
            4 => Some(Zone::Z4),
            5 => Some(Zone::Z5),
            _ => None,
        }
    }

    /// Position in [`Zone::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name, `"Z1"`..`"Z5"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Z1 => "Z1",
            Zone::Z2 => "Z2",
            Zone::Z3 => "Z3",
            Zone::Z4 => "Z4",
            Zone::Z5 => "Z5",
        }
    }

    /// `(low, high)` multipliers of the baseline pace.
    pub fn factors(&self) -> (f64, f64) {
        ZONE_FACTORS[self.index()]
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which point of a zone a session targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceKind {
    /// Slower edge of the zone
    Low,
    /// Midpoint of the zone
    Average,
    /// Faster edge of the zone
    High,
}

impl PaceKind {
    /// Parse `low`, `average`/`avg` or `high`, any case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(PaceKind::Low),
            "average" | "avg" => Some(PaceKind::Average),
            "high" => Some(PaceKind::High),
            _ => None,
        }
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaceKind::Low => "low",
            PaceKind::Average => "average",
            PaceKind::High => "high",
        }
    }
}

/// `(low, high)` baseline multipliers for Z1..Z5.
pub const ZONE_FACTORS: [(f64, f64); 5] = [
    (1.54, 1.33), // Z1
    (1.32, 1.16), // Z2
    (1.15, 1.01), // Z3
    (1.00, 0.91), // Z4
    (0.90, 0.83), // Z5
];

/// One zone of the pace table, in seconds per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaceZone {
    #[serde(rename = "name")]
    pub zone: Zone,
    /// Slower edge
    pub low: f64,
    /// Faster edge
    pub high: f64,
    /// Midpoint of `low` and `high`
    pub average: f64,
}

impl PaceZone {
    /// Pace for the requested point of the zone.
    pub fn pace(&self, kind: PaceKind) -> f64 {
        match kind {
            PaceKind::Low => self.low,
            PaceKind::Average => self.average,
            PaceKind::High => self.high,
        }
    }

    /// Whether the zone carries real paces.
    pub fn is_available(&self) -> bool {
        is_available(self.low) && is_available(self.high)
    }

    /// `"low - high"` display range.
    pub fn display_range(&self) -> String {
        format!("{} - {}", format_pace(self.low), format_pace(self.high))
    }
}

/// Baseline usable for scaling: finite and strictly positive.
pub(crate) fn usable_baseline(baseline_seconds: f64) -> Option<f64> {
    (baseline_seconds.is_finite() && baseline_seconds > 0.0).then_some(baseline_seconds)
}

/// Build the five pace zones for a baseline pace.
///
/// An unusable baseline gives zones whose paces are all unavailable.
pub fn build_zone_table(baseline_seconds: f64) -> [PaceZone; 5] {
    let baseline = usable_baseline(baseline_seconds);

    Zone::ALL.map(|zone| {
        let (low_factor, high_factor) = zone.factors();
        let (low, high) = match baseline {
            Some(b) => (b * low_factor, b * high_factor),
            None => (UNAVAILABLE, UNAVAILABLE),
        };
        PaceZone {
            zone,
            low,
            high,
            average: (low + high) / 2.0,
        }
    })
}
