//! Activity line classification.
//!
//! Maps a hand-written line such as `"Easy: 8km conversational pace"` to a
//! canonical [`ActivityType`] using the tiered tables in [`rules`], then a
//! label fallback for lines no rule recognizes.
//!
//! [`rules`]: crate::activities::rules

use serde::Serialize;

use crate::activities::rules::{
    rules_for, Tier, FALLBACK_LABELS, MAX_MULTI_WORD_LABEL_LEN, REJECTED_LABELS,
};
use crate::activities::types::{ActivityClassification, ActivityLine, ActivityType};

/// Which stage of the classifier produced a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// A prefix rule matched
    Prefix,
    /// An inclusion rule matched
    Inclusion,
    /// A last-resort rule matched
    LastResort,
    /// The label before the first colon was looked up
    Label,
    /// Nothing matched
    None,
}

impl From<Tier> for MatchSource {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Prefix => MatchSource::Prefix,
            Tier::Inclusion => MatchSource::Inclusion,
            Tier::LastResort => MatchSource::LastResort,
        }
    }
}

/// Classify an activity line.
pub fn classify(raw: &str) -> ActivityClassification {
    ActivityClassification::for_type(classify_with_source(raw).0)
}

/// Classify an activity line and report which stage decided.
pub fn classify_with_source(raw: &str) -> (ActivityType, MatchSource) {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return (ActivityType::Unknown, MatchSource::None);
    }

    for tier in [Tier::Prefix, Tier::Inclusion, Tier::LastResort] {
        if let Some(rule) = rules_for(tier).iter().find(|r| r.matches(tier, &normalized)) {
            return (rule.activity, tier.into());
        }
    }

    match label_fallback(raw) {
        Some(activity) => (activity, MatchSource::Label),
        None => (ActivityType::Unknown, MatchSource::None),
    }
}

/// Look up the `label` of a `label ":" description` line.
///
/// A label that is itself a canonical name is accepted; anything outside the
/// canonical set is rejected by `ActivityType::from_str`.
fn label_fallback(raw: &str) -> Option<ActivityType> {
    let label = ActivityLine::parse(raw).label()?.to_lowercase();

    if is_degenerate_label(&label) {
        return None;
    }

    FALLBACK_LABELS
        .iter()
        .find(|(token, _)| *token == label)
        .map(|(_, activity)| *activity)
        .or_else(|| label.parse::<ActivityType>().ok())
        .filter(|activity| *activity != ActivityType::Unknown)
}

fn is_degenerate_label(label: &str) -> bool {
    label.is_empty()
        || REJECTED_LABELS.contains(&label)
        || (label.split_whitespace().count() > 1 && label.len() > MAX_MULTI_WORD_LABEL_LEN)
}
