//! Unit tests for activity classification.

use marathon_plan::activities::{classify, classify_with_source, ActivityType, MatchSource};

#[test]
fn test_interval_with_zone_reference() {
    let c = classify("Intervals: 6x400m @ Z5 (High)");
    assert_eq!(c.canonical_type, ActivityType::Interval);
    assert_eq!(c.color_class, "activity-interval");
    assert_eq!(c.display_icon, Some("icons/interval_run.svg"));
}

#[test]
fn test_rest_prefix_wins_over_easy_keyword() {
    let (t, source) = classify_with_source("Rest: easy walk");
    assert_eq!(t, ActivityType::Rest);
    assert_eq!(source, MatchSource::Prefix);
}

#[test]
fn test_common_sheet_lines() {
    let cases = [
        ("Easy: 8km conversational", ActivityType::Easy),
        ("Base: 10km steady Z2 (Low)", ActivityType::Base),
        ("Long Run: 30km with 10km Z3 (High)", ActivityType::Long),
        ("Tempo: 3km Z2 (Average), 6km Z4 (Low)", ActivityType::Tempo),
        ("Recovery: 5km very easy", ActivityType::Recovery),
        ("Fartlek: 10x1min on / 1min off", ActivityType::Fartlek),
        ("Hill repeats: 8x60s", ActivityType::StridesHills),
        ("Rest day", ActivityType::Rest),
        ("Zone Test: 5km Z4 (High)", ActivityType::ZoneTest),
        ("Race: Marathon", ActivityType::Race),
        ("Mobility: 30min yoga", ActivityType::Mobility),
        ("Double: 6km AM, 5km PM", ActivityType::Double),
        ("10km in zone 2", ActivityType::Zone),
    ];

    for (raw, expected) in cases {
        assert_eq!(classify(raw).canonical_type, expected, "{raw}");
    }
}

#[test]
fn test_label_fallback_lines() {
    assert_eq!(classify("LR: 22km").canonical_type, ActivityType::Long);
    assert_eq!(classify("Shakeout: 4km").canonical_type, ActivityType::Recovery);
    assert_eq!(classify("Parkrun: 5km relaxed").canonical_type, ActivityType::Race);
}

#[test]
fn test_unrecognized_lines_are_unknown() {
    for raw in ["", "   ", "Run: 10km", "Mon: 20min", "???"] {
        let c = classify(raw);
        assert_eq!(c.canonical_type, ActivityType::Unknown, "{raw:?}");
        assert!(!c.is_known());
        assert_eq!(c.display_icon, None);
    }
}

#[test]
fn test_classification_is_pure() {
    let lines = [
        "Tempo: 6km Z4 (Low)",
        "Easy: 10km + strides",
        "LR: 22km",
        "Mon: 20min",
    ];
    for raw in lines {
        assert_eq!(classify(raw), classify(raw));
        assert_eq!(classify_with_source(raw), classify_with_source(raw));
    }
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("TEMPO: 6KM").canonical_type, ActivityType::Tempo);
    assert_eq!(classify("lr: 20km").canonical_type, ActivityType::Long);
}

#[test]
fn test_every_type_has_display_metadata() {
    for t in ActivityType::ALL {
        let name = t.as_str();
        assert_eq!(name.parse::<ActivityType>(), Ok(t));
        if t != ActivityType::Unknown {
            assert!(t.color_class().starts_with("activity-"), "{name}");
        }
    }
}

#[test]
fn test_strides_and_hills_as_add_ons() {
    let cases = [
        "8km easy + 6 strides",
        "10km easy + 4x100m strides",
        "Easy 8km with 6 hill sprints",
        "easy 10km and 2 hills",
    ];
    for raw in cases {
        assert_eq!(classify(raw).canonical_type, ActivityType::Easy, "{raw}");
    }

    assert_eq!(classify("6 strides after 5km jog").canonical_type, ActivityType::StridesHills);
    assert_eq!(classify("Hill sprints 8x10s").canonical_type, ActivityType::StridesHills);
}

#[test]
fn test_keywords_match_whole_words() {
    assert_eq!(classify("8km chill jog").canonical_type, ActivityType::Unknown);
    assert_eq!(classify("10km easy on a hilly route").canonical_type, ActivityType::Easy);
    assert_eq!(classify("12km baseline check").canonical_type, ActivityType::Unknown);
    assert_eq!(classify("Steady 12km base").canonical_type, ActivityType::Base);
}
