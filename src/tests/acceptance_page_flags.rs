//! Acceptance tests for page-level effects
//!
//! Test scenarios:
//! 1. Light mode switches on exactly at contact top minus 0.8 viewports
//! 2. Mark and full layers crossfade between the mindset section and the lock
//! 3. Header logos crossfade with linear zoom progress
//! 4. Header hides on narrow viewports while the mindset section is on top

use crate::config::ResolverConfig;
use crate::host::simulated::{BoxSpec, PageLayout, ViewportSpec};
use crate::model::Element;
use crate::test_harness::{ScrollHarness, LANDING_PAGE};
use std::collections::BTreeMap;

fn contact_page() -> PageLayout {
    let mut elements = BTreeMap::new();
    elements.insert(Element::MarkLayer, BoxSpec::fixed(0.0, 1000.0));
    elements.insert(Element::FullLayer, BoxSpec::fixed(0.0, 1000.0));
    elements.insert(Element::Header, BoxSpec::fixed(0.0, 80.0));
    elements.insert(Element::StaticLogo, BoxSpec::in_flow(3000.0, 100.0));
    elements.insert(Element::ContactSection, BoxSpec::in_flow(5000.0, 1000.0));
    PageLayout {
        viewport: ViewportSpec {
            width: 1280.0,
            height: 1000.0,
        },
        document_height: Some(8000.0),
        elements,
        reveal: Vec::new(),
    }
}

#[test]
fn light_mode_switches_at_exact_offset() {
    let mut harness = ScrollHarness::from_layout(&contact_page(), ResolverConfig::default())
        .expect("Should attach");

    // 5000 - 0.8 * 1000
    let before = harness.scroll_to(4199.0).expect("Placeholder present");
    assert!(!before.light_mode);
    assert!(!harness.applied().is_light_mode());

    let at = harness.scroll_to(4200.0).expect("Placeholder present");
    assert!(at.light_mode);
    assert!(harness.applied().is_light_mode());
    assert_eq!(harness.applied().header_visible, Some(false));

    // Scrolling back up leaves light mode again
    harness.scroll_to(4199.0);
    assert!(!harness.applied().is_light_mode());
    assert_eq!(harness.applied().header_visible, Some(true));
}

#[test]
fn layers_crossfade_between_mindset_and_lock() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");

    // Window: 1800 - 450 = 1350 .. 2600
    harness.scroll_to(1350.0);
    assert_eq!(harness.applied().opacities.get(&Element::MarkLayer), Some(&1.0));
    assert_eq!(harness.applied().opacities.get(&Element::FullLayer), Some(&0.0));

    harness.scroll_to(1975.0);
    assert_eq!(harness.applied().opacities.get(&Element::MarkLayer), Some(&0.5));
    assert_eq!(harness.applied().opacities.get(&Element::FullLayer), Some(&0.5));

    harness.scroll_to(2600.0);
    assert_eq!(harness.applied().opacities.get(&Element::MarkLayer), Some(&0.0));
    assert_eq!(harness.applied().opacities.get(&Element::FullLayer), Some(&1.0));
}

#[test]
fn header_logos_crossfade_with_zoom_progress() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");

    harness.scroll_to(1300.0);

    let opacities = &harness.applied().opacities;
    assert_eq!(opacities.get(&Element::HeaderLogoStart), Some(&0.0));
    assert_eq!(opacities.get(&Element::HeaderLogoEnd), Some(&0.5));
}

#[test]
fn mobile_header_hides_while_mindset_is_on_top() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");
    harness.resize(375.0, 800.0);

    // Mindset section 200px from the top
    let hidden = harness.scroll_to(1600.0).expect("Placeholder present");
    assert!(!hidden.header_visible);
    assert_eq!(harness.applied().header_visible, Some(false));

    let shown = harness.scroll_to(0.0).expect("Placeholder present");
    assert!(shown.header_visible);
    assert_eq!(harness.applied().header_visible, Some(true));
}

#[test]
fn desktop_header_stays_visible_over_mindset() {
    let mut harness = ScrollHarness::from_fixture(LANDING_PAGE).expect("Should load fixture");

    let state = harness.scroll_to(1600.0).expect("Placeholder present");

    assert!(state.header_visible);
    assert_eq!(harness.applied().header_visible, Some(true));
}
