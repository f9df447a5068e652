//! Impure shell: the page the effects run against.
//!
//! The [`Host`] trait abstracts the document and layout engine. The resolver
//! never sees it; [`ScrollEffects`] reads a fresh [`AnchorSnapshot`] from the
//! host on every event, resolves, and writes the result back.

pub mod effects;
pub mod simulated;
#[cfg(feature = "web")]
pub mod web;

pub use effects::{PageEvent, ScrollEffects, LIGHT_MODE_CLASS};
pub use simulated::{AppliedStyles, LayoutError, PageLayout, SimulatedPage};

use crate::model::{AnchorSnapshot, Element, ElementBox, Viewport};
use crate::resolver::LayerTransform;
use crate::reveal::{RevealKey, RevealStyle};

/// Read/write access to the host document.
///
/// Reads must reflect the live layout at call time; implementations must not
/// cache geometry across calls.
pub trait Host {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Live box of `element`, or `None` when it is not in the page.
    fn element_box(&self, element: Element) -> Option<ElementBox>;

    /// Live boxes of every reveal target.
    fn reveal_boxes(&self) -> Vec<(RevealKey, ElementBox)>;

    /// Whether `element` exists.
    fn has_element(&self, element: Element) -> bool {
        self.element_box(element).is_some()
    }

    /// Write a layer transform.
    fn set_transform(&mut self, element: Element, transform: &LayerTransform);

    /// Write an element opacity.
    fn set_opacity(&mut self, element: Element, opacity: f64);

    /// Add or remove a class on the document body.
    fn set_body_class(&mut self, class: &str, enabled: bool);

    /// Show/hide the header (opacity and pointer interaction together).
    fn set_header_visible(&mut self, visible: bool);

    /// Apply the hidden starting style to a reveal target.
    fn prepare_reveal(&mut self, key: &RevealKey, style: &RevealStyle);

    /// Write the revealed style over the hidden one and add the revealed
    /// class.
    fn mark_revealed(&mut self, key: &RevealKey, style: &RevealStyle);
}

impl AnchorSnapshot {
    /// Read every anchor from the host.
    pub fn capture<H: Host + ?Sized>(host: &H) -> Self {
        Self {
            static_logo: host.element_box(Element::StaticLogo),
            mindset: host.element_box(Element::MindsetSection),
            strength: host.element_box(Element::StrengthSection),
            contact: host.element_box(Element::ContactSection),
            supporters: host.element_box(Element::SupportersSection),
        }
    }
}
