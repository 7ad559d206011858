//! Interval paces for fixed repeat distances.

use serde::Serialize;

use crate::pace::format::UNAVAILABLE;
use crate::pace::zones::usable_baseline;

/// A repeat distance with its pace factor relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatDistance {
    /// Display label
    pub label: &'static str,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Multiplier of the baseline pace
    pub factor: f64,
}

/// Repeat distances, longest first. Shorter repeats run faster.
pub const REPEAT_DISTANCES: [RepeatDistance; 6] = [
    RepeatDistance { label: "3km", distance_km: 3.0, factor: 0.96 },
    RepeatDistance { label: "1 mile", distance_km: 1.609_344, factor: 0.93 },
    RepeatDistance { label: "1km", distance_km: 1.0, factor: 0.91 },
    RepeatDistance { label: "800m", distance_km: 0.8, factor: 0.89 },
    RepeatDistance { label: "400m", distance_km: 0.4, factor: 0.86 },
    RepeatDistance { label: "200m", distance_km: 0.2, factor: 0.83 },
];

/// Target pace and split time for one repeat distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatPace {
    /// Display label, e.g. `"800m"`
    pub label: &'static str,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Seconds per kilometer
    pub pace_seconds_per_km: f64,
    /// Seconds for the whole repeat
    pub total_time_seconds: f64,
}

/// Build the repeat table for a baseline pace.
///
/// An unusable baseline gives unavailable paces and times.
pub fn build_repeat_table(baseline_seconds: f64) -> [RepeatPace; 6] {
    let baseline = usable_baseline(baseline_seconds);

    REPEAT_DISTANCES.map(|repeat| {
        let pace = baseline.map_or(UNAVAILABLE, |b| b * repeat.factor);
        RepeatPace {
            label: repeat.label,
            distance_km: repeat.distance_km,
            pace_seconds_per_km: pace,
            total_time_seconds: pace * repeat.distance_km,
        }
    })
}
