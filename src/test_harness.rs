//! Acceptance test harness for scroll effects
//!
//! Wraps a [`SimulatedPage`] and its attached [`ScrollEffects`] so tests
//! can drive the page the way a visitor would: scroll, resize, and let
//! late-loading content reflow the layout.

use crate::config::ResolverConfig;
use crate::host::{AppliedStyles, PageEvent, PageLayout, ScrollEffects, SimulatedPage};
use crate::host::simulated::BoxSpec;
use crate::model::{AppError, Element, Viewport};
use crate::resolver::VisualState;
use crate::reveal::{RevealKey, RevealStyle, DEFAULT_REVEAL_THRESHOLD};

/// Desktop landing page fixture.
pub const LANDING_PAGE: &str = "tests/fixtures/landing_page.toml";

/// Test harness for acceptance testing
pub struct ScrollHarness {
    page: SimulatedPage,
    effects: ScrollEffects,
}

impl ScrollHarness {
    /// Load a layout fixture and attach with default settings.
    pub fn from_fixture(path: &str) -> Result<Self, AppError> {
        Self::from_fixture_with_config(path, ResolverConfig::default())
    }

    /// Load a layout fixture and attach with `config`.
    pub fn from_fixture_with_config(path: &str, config: ResolverConfig) -> Result<Self, AppError> {
        let layout = PageLayout::load(path)?;
        Self::from_layout(&layout, config)
    }

    /// Attach to an in-memory layout.
    pub fn from_layout(layout: &PageLayout, config: ResolverConfig) -> Result<Self, AppError> {
        let mut page = SimulatedPage::new(layout)?;
        let effects = ScrollEffects::attach(&mut page, config, DEFAULT_REVEAL_THRESHOLD)?;
        Ok(Self { page, effects })
    }

    /// Scroll and deliver a scroll event.
    pub fn scroll_to(&mut self, y: f64) -> Option<VisualState> {
        self.page.scroll_to(y);
        self.effects.handle(&mut self.page, PageEvent::Scroll).state
    }

    /// Resize the window and deliver a resize event.
    pub fn resize(&mut self, width: f64, height: f64) -> Option<VisualState> {
        let viewport = Viewport::new(width, height).ok()?;
        self.page.resize(viewport);
        self.effects.handle(&mut self.page, PageEvent::Resize).state
    }

    /// Reflow an element and deliver a load event (images arriving late).
    pub fn reflow(&mut self, element: Element, spec: BoxSpec) -> Option<VisualState> {
        self.page.move_element(element, spec);
        self.effects.handle(&mut self.page, PageEvent::Load).state
    }

    /// Styles written to the page so far.
    pub fn applied(&self) -> &AppliedStyles {
        self.page.applied()
    }

    /// Whether `key` carries the revealed class.
    pub fn is_revealed(&self, key: &str) -> bool {
        self.page.applied().revealed.contains(&RevealKey::new(key))
    }

    /// Inline style last written to reveal target `key`.
    pub fn reveal_style(&self, key: &str) -> Option<&RevealStyle> {
        self.page.applied().reveal_styles.get(&RevealKey::new(key))
    }

    /// CSS transform currently written to `element`.
    pub fn transform_of(&self, element: Element) -> Option<&str> {
        self.page
            .applied()
            .transforms
            .get(&element)
            .map(String::as_str)
    }
}
