//! Behavioral tests for the one-shot visibility set

#![allow(clippy::unwrap_used)]

use crate::models::section::SectionId;
use crate::models::visibility::{IntersectionReport, Threshold, VisibilitySet};

// ============================================================================
// THRESHOLD
// ============================================================================

#[test]
fn given_region_past_threshold_when_reported_then_marked_seen() {
    let mut set = VisibilitySet::new();

    let newly_seen = set.record(
        &IntersectionReport::new("contact", true, 0.15),
        Threshold::DEFAULT,
    );

    assert_eq!(newly_seen, Some(SectionId::Contact));
    assert!(set.is_seen(SectionId::Contact));
}

#[test]
fn given_region_below_threshold_when_reported_then_not_seen() {
    let mut set = VisibilitySet::new();

    set.record(
        &IntersectionReport::new("contact", true, 0.02),
        Threshold::DEFAULT,
    );

    assert!(!set.is_seen(SectionId::Contact));
}

#[test]
fn given_custom_threshold_when_ratio_between_defaults_then_respects_custom() {
    let mut set = VisibilitySet::new();
    let half = Threshold::new(0.5).unwrap();
    let report = IntersectionReport::new("about", true, 0.3);

    assert_eq!(set.record(&report, half), None);
    assert_eq!(set.record(&report, Threshold::DEFAULT), Some(SectionId::About));
}

// ============================================================================
// MONOTONICITY
// ============================================================================

#[test]
fn given_seen_section_when_it_leaves_viewport_then_stays_seen() {
    let mut set = VisibilitySet::new();
    set.record(&IntersectionReport::new("services", true, 0.8), Threshold::DEFAULT);

    let leaving = [
        IntersectionReport::new("services", false, 0.0),
        IntersectionReport::new("services", true, 0.01),
    ];
    set.apply(&leaving, Threshold::DEFAULT);

    assert!(set.is_seen(SectionId::Services));
}

#[test]
fn given_arbitrary_report_sequence_when_applied_then_seen_set_never_shrinks() {
    let mut set = VisibilitySet::new();
    let ids = ["home", "services", "about", "contact", "nav", "footer"];
    let mut previous = 0;

    // Deterministic pseudo-random walk over ids, ratios and intersection flags
    let mut seed: u32 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let id = ids.get((seed >> 8) as usize % ids.len()).copied().unwrap_or("home");
        let ratio = f64::from((seed >> 16) % 101) / 100.0;
        let intersecting = (seed >> 4) % 3 != 0;

        let before: Vec<SectionId> = set.seen().collect();
        set.record(&IntersectionReport::new(id, intersecting, ratio), Threshold::DEFAULT);

        assert!(set.len() >= previous);
        assert!(before.iter().all(|section| set.is_seen(*section)));
        previous = set.len();
    }
}

#[test]
fn given_same_section_seen_twice_when_recorded_then_reported_new_only_once() {
    let mut set = VisibilitySet::new();
    let report = IntersectionReport::new("home", true, 1.0);

    let first = set.apply([&report, &report], Threshold::DEFAULT);

    assert_eq!(first, vec![SectionId::Home]);
}
