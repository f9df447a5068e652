//! Acceptance tests for the zoom-in and lock phases
//!
//! Test scenarios:
//! 1. No sections on the page: the zoom range floors to one viewport
//! 2. Placeholder at 3000px: the lock begins at 2600 with no offset
//! 3. Late reflow above the placeholder is tracked while locked
//! 4. Strength-section lock reference hands off without a jump

use crate::config::{LockReference, ResolverConfig};
use crate::host::simulated::{BoxSpec, PageLayout, ViewportSpec};
use crate::model::Element;
use crate::resolver::Phase;
use crate::test_harness::{ScrollHarness, LANDING_PAGE};
use std::collections::BTreeMap;

const EPS: f64 = 1e-6;

/// Page with only the logo layers and a placeholder near the top.
fn bare_page() -> PageLayout {
    let mut elements = BTreeMap::new();
    elements.insert(Element::MarkLayer, BoxSpec::fixed(0.0, 800.0));
    elements.insert(Element::FullLayer, BoxSpec::fixed(0.0, 800.0));
    elements.insert(Element::StaticLogo, BoxSpec::in_flow(100.0, 100.0));
    PageLayout {
        viewport: ViewportSpec {
            width: 1280.0,
            height: 800.0,
        },
        document_height: Some(4000.0),
        elements,
        reveal: Vec::new(),
    }
}

#[test]
fn without_sections_zoom_range_floors_to_one_viewport() {
    // GIVEN: a page with no sections, 800px viewport
    let mut harness = ScrollHarness::from_layout(&bare_page(), ResolverConfig::default())
        .expect("Should attach");

    // WHEN: at the top
    let top = harness.scroll_to(0.0).expect("Placeholder present");

    // THEN: hero state, zoom ends after one viewport
    assert_eq!(top.triggers.animation_end, 800.0);
    assert_eq!(top.mark.transform.scale, 8.0);
    assert_eq!(top.mark.transform.translate_x_pct, -60.0);

    // WHEN: scrolled exactly one viewport
    let locked = harness.scroll_to(800.0).expect("Placeholder present");

    // THEN: fully zoomed and slid in
    assert_eq!(locked.phase, Phase::Locked);
    assert_eq!(locked.mark.transform.scale, 1.0);
    assert_eq!(locked.mark.transform.translate_x_pct, 0.0);
    assert_eq!(
        harness.transform_of(Element::MarkLayer),
        Some("translate(0%, 0px) rotate(0deg) scale(1)")
    );
}

#[test]
fn lock_begins_when_placeholder_reaches_viewport_centre() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");

    let before = harness.scroll_to(2599.0).expect("Placeholder present");
    assert!(matches!(before.phase, Phase::ZoomIn { .. }));

    // 3000 + 50 - 450
    let at = harness.scroll_to(2600.0).expect("Placeholder present");
    assert_eq!(at.triggers.animation_end, 2600.0);
    assert_eq!(at.phase, Phase::Locked);
    assert_eq!(at.mark.transform.translate_y_px, 0.0);
    assert_eq!(
        harness.transform_of(Element::MarkLayer),
        Some("translate(0%, 0px) rotate(0deg) scale(1)")
    );
}

#[test]
fn locked_logo_scrolls_with_the_page() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");

    harness.scroll_to(2600.0);
    let later = harness.scroll_to(2750.0).expect("Placeholder present");

    assert!((later.mark.transform.translate_y_px + 150.0).abs() < EPS);
    assert_eq!(
        harness.transform_of(Element::MarkLayer),
        Some("translate(0%, -150px) rotate(0deg) scale(1)")
    );
}

#[test]
fn reflow_above_placeholder_is_tracked() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");
    let before = harness.scroll_to(2800.0).expect("Placeholder present");

    // An image above the placeholder finished loading and pushed it down
    let after = harness
        .reflow(Element::StaticLogo, BoxSpec::in_flow(3040.0, 100.0))
        .expect("Placeholder present");

    assert_eq!(after.phase, Phase::Locked);
    assert!(
        (after.mark.transform.translate_y_px - before.mark.transform.translate_y_px - 40.0).abs()
            < EPS
    );
    assert_eq!(after.triggers.animation_end, 2640.0);
}

#[test]
fn strength_section_reference_hands_off_without_jump() {
    let config = ResolverConfig {
        lock_reference: LockReference::StrengthSection,
        ..ResolverConfig::default()
    };
    let mut harness = ScrollHarness::from_fixture_with_config(LANDING_PAGE, config)
        .expect("Should load fixture");

    // 2700 - 450
    let at = harness.scroll_to(2250.0).expect("Placeholder present");
    assert_eq!(at.triggers.animation_end, 2250.0);
    assert_eq!(at.phase, Phase::Locked);
    assert!(at.mark.transform.translate_y_px.abs() < EPS);

    let later = harness.scroll_to(2350.0).expect("Placeholder present");
    assert!((later.mark.transform.translate_y_px + 100.0).abs() < EPS);
}

#[test]
fn collapsed_placeholder_still_drives_the_logo() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");
    harness.scroll_to(1000.0);
    let frozen = harness.applied().transforms.clone();

    // Lock point moves from 2600 to 2550
    assert!(harness
        .reflow(Element::StaticLogo, BoxSpec::in_flow(3000.0, 0.0))
        .is_some());
    assert_ne!(harness.applied().transforms, frozen);
}
