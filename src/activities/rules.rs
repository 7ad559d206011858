//! Declarative classification tables.
//!
//! Tiers are evaluated strictly in order (prefix, inclusion, last resort) and
//! the first matching rule of the first matching tier decides the type. The
//! order of rules inside a tier is part of the contract: earlier rules shadow
//! later ones.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::activities::types::ActivityType;
use ActivityType::*;

fn word_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("guard pattern is valid")
}

static HILL_WORD: Lazy<Regex> = Lazy::new(|| word_pattern(r"\bhills?\b"));
static BASE_WORD: Lazy<Regex> = Lazy::new(|| word_pattern(r"\bbase\b"));

/// A joiner, then anything short of a clause break, then the keyword:
/// "8km easy + 6 strides", "easy with 6 hill sprints".
static STRIDES_ADD_ON: Lazy<Regex> =
    Lazy::new(|| word_pattern(r"(?:\+|&|\b(?:with|and|plus)\b)[^,;]*\bstrides\b"));
static HILLS_ADD_ON: Lazy<Regex> =
    Lazy::new(|| word_pattern(r"(?:\+|&|\b(?:with|and|plus)\b)[^,;]*\bhills?\b"));

/// Guard predicate over the whole normalized line.
pub type Guard = fn(&str) -> bool;

/// Priority tier of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Normalized line starts with the pattern
    Prefix,
    /// Normalized line contains the pattern
    Inclusion,
    /// Broad patterns, only after the other tiers found nothing
    LastResort,
}

/// One `(pattern, type)` entry of a tier.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lower-case literal to look for
    pub pattern: &'static str,
    /// Type assigned on match
    pub activity: ActivityType,
    /// Optional extra condition on the whole line
    pub guard: Option<Guard>,
}

impl Rule {
    const fn new(pattern: &'static str, activity: ActivityType) -> Self {
        Self {
            pattern,
            activity,
            guard: None,
        }
    }

    const fn guarded(pattern: &'static str, activity: ActivityType, guard: Guard) -> Self {
        Self {
            pattern,
            activity,
            guard: Some(guard),
        }
    }

    /// Whether the rule fires on an already-normalized line.
    pub fn matches(&self, tier: Tier, normalized: &str) -> bool {
        let hit = match tier {
            Tier::Prefix => normalized.starts_with(self.pattern),
            Tier::Inclusion | Tier::LastResort => normalized.contains(self.pattern),
        };
        hit && self.guard.map_or(true, |guard| guard(normalized))
    }
}

/// Tier 1: label prefixes.
pub static PREFIX_RULES: &[Rule] = &[
    Rule::new("race day:", Race),
    Rule::new("race:", Race),
    Rule::new("zone test:", ZoneTest),
    Rule::new("test:", ZoneTest),
    Rule::new("long run:", Long),
    Rule::new("long:", Long),
    Rule::new("easy:", Easy),
    Rule::new("base:", Base),
    Rule::new("tempo:", Tempo),
    Rule::new("threshold:", Tempo),
    Rule::new("recovery:", Recovery),
    Rule::new("intervals:", Interval),
    Rule::new("interval:", Interval),
    Rule::new("fartlek:", Fartlek),
    Rule::new("strides:", StridesHills),
    Rule::new("hill repeats:", StridesHills),
    Rule::new("hills:", StridesHills),
    Rule::new("rest:", Rest),
    Rule::new("rest day", Rest),
    Rule::new("off:", Rest),
    Rule::new("mobility:", Mobility),
    Rule::new("strength:", Mobility),
    Rule::new("cross-training:", Mobility),
    Rule::new("cross training:", Mobility),
    Rule::new("double:", Double),
];

/// Tier 2: keywords anywhere in the line.
pub static INCLUSION_RULES: &[Rule] = &[
    Rule::new("race day", Race),
    Rule::new("zone test", ZoneTest),
    Rule::new("time trial", ZoneTest),
    Rule::new("long run", Long),
    Rule::new("fartlek", Fartlek),
    Rule::new("tempo", Tempo),
    Rule::new("threshold", Tempo),
    Rule::new("interval", Interval),
    Rule::guarded("repeats", Interval, not_hill_repeats),
    Rule::guarded("hill", StridesHills, standalone_hills),
    Rule::guarded("strides", StridesHills, standalone_strides),
    Rule::new("double", Double),
    Rule::new("two runs", Double),
    Rule::new("recovery", Recovery),
    Rule::new("mobility", Mobility),
    Rule::new("strength", Mobility),
    Rule::new("yoga", Mobility),
    Rule::new("stretch", Mobility),
    Rule::new("cross-train", Mobility),
    Rule::guarded("rest", Rest, has_rest_word),
    Rule::new("easy", Easy),
    Rule::guarded("base", Base, has_base_word),
    Rule::new("aerobic", Base),
];

/// Tier 3: ambiguous keywords.
pub static LAST_RESORT_RULES: &[Rule] = &[Rule::new("zone", Zone)];

/// Short labels (text before the first colon) and the type they stand for.
pub static FALLBACK_LABELS: &[(&str, ActivityType)] = &[
    ("ez", Easy),
    ("lr", Long),
    ("lsr", Long),
    ("thr", Tempo),
    ("lt", Tempo),
    ("lt2", Tempo),
    ("mp", Tempo),
    ("progression", Tempo),
    ("int", Interval),
    ("ints", Interval),
    ("vo2", Interval),
    ("vo2max", Interval),
    ("speed", Interval),
    ("track", Interval),
    ("rec", Recovery),
    ("shakeout", Recovery),
    ("off", Rest),
    ("xt", Mobility),
    ("gym", Mobility),
    ("core", Mobility),
    ("drills", StridesHills),
    ("test", ZoneTest),
    ("parkrun", Race),
    ("steady", Base),
    ("z1", Zone),
    ("z2", Zone),
    ("z3", Zone),
    ("z4", Zone),
    ("z5", Zone),
    ("2x", Double),
    ("am/pm", Double),
];

/// Labels too generic to mean anything on their own.
pub static REJECTED_LABELS: &[&str] = &["run", "workout"];

/// Multi-word labels longer than this are prose, not labels.
pub const MAX_MULTI_WORD_LABEL_LEN: usize = 15;

/// Rules of a tier.
pub fn rules_for(tier: Tier) -> &'static [Rule] {
    match tier {
        Tier::Prefix => PREFIX_RULES,
        Tier::Inclusion => INCLUSION_RULES,
        Tier::LastResort => LAST_RESORT_RULES,
    }
}

fn standalone_strides(normalized: &str) -> bool {
    !STRIDES_ADD_ON.is_match(normalized)
}

/// "hill" or "hills" as a word, not tacked onto another session.
fn standalone_hills(normalized: &str) -> bool {
    HILL_WORD.is_match(normalized) && !HILLS_ADD_ON.is_match(normalized)
}

fn not_hill_repeats(normalized: &str) -> bool {
    !HILL_WORD.is_match(normalized)
}

/// Not "baseline".
fn has_base_word(normalized: &str) -> bool {
    BASE_WORD.is_match(normalized)
}

/// "rest" as a word, not inside "interest" or "forest".
fn has_rest_word(normalized: &str) -> bool {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "rest")
}
