//! Activity types and display metadata.

use serde::{Deserialize, Serialize};

/// Canonical activity type of a scheduled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Easy conversational run
    Easy,
    /// Steady aerobic base run
    Base,
    /// Long run
    Long,
    /// Tempo / threshold run
    Tempo,
    /// Recovery jog
    Recovery,
    /// Interval session
    Interval,
    /// Fartlek session
    Fartlek,
    /// Strides or hill repeats as the main session
    StridesHills,
    /// Rest day
    Rest,
    /// Zone / fitness test
    ZoneTest,
    /// Race
    Race,
    /// Mobility, strength or cross-training
    Mobility,
    /// Two sessions in one day
    Double,
    /// Generic zone-prescribed run
    Zone,
    /// Not recognized
    #[default]
    Unknown,
}

impl ActivityType {
    /// Every canonical type, `Unknown` last.
    pub const ALL: [ActivityType; 15] = [
        ActivityType::Easy,
        ActivityType::Base,
        ActivityType::Long,
        ActivityType::Tempo,
        ActivityType::Recovery,
        ActivityType::Interval,
        ActivityType::Fartlek,
        ActivityType::StridesHills,
        ActivityType::Rest,
        ActivityType::ZoneTest,
        ActivityType::Race,
        ActivityType::Mobility,
        ActivityType::Double,
        ActivityType::Zone,
        ActivityType::Unknown,
    ];

    /// Canonical name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Easy => "easy",
            ActivityType::Base => "base",
            ActivityType::Long => "long",
            ActivityType::Tempo => "tempo",
            ActivityType::Recovery => "recovery",
            ActivityType::Interval => "interval",
            ActivityType::Fartlek => "fartlek",
            ActivityType::StridesHills => "strides_hills",
            ActivityType::Rest => "rest",
            ActivityType::ZoneTest => "zone_test",
            ActivityType::Race => "race",
            ActivityType::Mobility => "mobility",
            ActivityType::Double => "double",
            ActivityType::Zone => "zone",
            ActivityType::Unknown => "unknown",
        }
    }

    /// Icon asset for the type, if it has one.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            ActivityType::Easy | ActivityType::Recovery => Some("icons/easy_run.svg"),
            ActivityType::Base => Some("icons/base_run.svg"),
            ActivityType::Long => Some("icons/long_run.svg"),
            ActivityType::Tempo => Some("icons/tempo_run.svg"),
            ActivityType::Interval => Some("icons/interval_run.svg"),
            ActivityType::Fartlek => Some("icons/fartlek_run.svg"),
            ActivityType::Rest => Some("icons/rest_day.svg"),
            _ => None,
        }
    }

    /// Style key for the type, empty for `Unknown`.
    pub fn color_class(&self) -> &'static str {
        match self {
            ActivityType::Easy => "activity-easy",
            ActivityType::Base => "activity-base",
            ActivityType::Long => "activity-long",
            ActivityType::Tempo => "activity-tempo",
            ActivityType::Recovery => "activity-recovery",
            ActivityType::Interval => "activity-interval",
            ActivityType::Fartlek => "activity-fartlek",
            ActivityType::StridesHills => "activity-str",
            ActivityType::Rest => "activity-rest",
            ActivityType::ZoneTest | ActivityType::Zone => "activity-zone",
            ActivityType::Race => "activity-race",
            ActivityType::Mobility => "activity-mobility",
            ActivityType::Double => "activity-double",
            ActivityType::Unknown => "",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    /// Parse a canonical name. `"unknown"` itself is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown activity type: {}", s))
    }
}

/// Result of classifying one activity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityClassification {
    /// Canonical type
    pub canonical_type: ActivityType,
    /// Icon asset, present for a subset of types
    pub display_icon: Option<&'static str>,
    /// Style key, empty for `Unknown`
    pub color_class: &'static str,
}

impl ActivityClassification {
    /// Build the classification for a canonical type.
    pub fn for_type(canonical_type: ActivityType) -> Self {
        Self {
            canonical_type,
            display_icon: canonical_type.icon(),
            color_class: canonical_type.color_class(),
        }
    }

    /// The classification of unrecognized input.
    pub fn unknown() -> Self {
        Self::for_type(ActivityType::Unknown)
    }

    /// Whether the line was recognized.
    pub fn is_known(&self) -> bool {
        self.canonical_type != ActivityType::Unknown
    }
}

impl Default for ActivityClassification {
    fn default() -> Self {
        Self::unknown()
    }
}

/// An activity line split as `label ":" description`.
///
/// Only the first colon separates; later colons belong to the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLine<'a> {
    label: Option<&'a str>,
    description: &'a str,
}

impl<'a> ActivityLine<'a> {
    /// Split a raw activity line.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((label, description)) => Self {
                label: Some(label.trim()),
                description: description.trim(),
            },
            None => Self {
                label: None,
                description: raw.trim(),
            },
        }
    }

    /// Text before the first colon, trimmed; `None` if there is no colon.
    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    /// Text after the first colon (or the whole line), trimmed.
    pub fn description(&self) -> &'a str {
        self.description
    }
}
