//! The fixed set of page elements the effects read from or write to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page element known to the scroll effects.
///
/// Layers (`MarkLayer`, `FullLayer`) and the `StaticLogo` placeholder are
/// mandatory; everything else is optional and degrades to a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Element {
    /// Fixed background logo, mark variant.
    MarkLayer,
    /// Fixed background logo, full wordmark variant.
    FullLayer,
    /// In-flow placeholder marking where the locked logo sits.
    StaticLogo,
    /// Header logo shown at the top of the page.
    HeaderLogoStart,
    /// Header logo faded in while scrolling.
    HeaderLogoEnd,
    /// Site header bar.
    Header,
    /// "Mindset" section.
    MindsetSection,
    /// "Strength" section.
    StrengthSection,
    /// Contact section.
    ContactSection,
    /// Supporters section.
    SupportersSection,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Element; 10] = [
        Element::MarkLayer,
        Element::FullLayer,
        Element::StaticLogo,
        Element::HeaderLogoStart,
        Element::HeaderLogoEnd,
        Element::Header,
        Element::MindsetSection,
        Element::StrengthSection,
        Element::ContactSection,
        Element::SupportersSection,
    ];

    /// CSS selector locating the element in the page markup.
    pub fn selector(&self) -> &'static str {
        match self {
            Element::MarkLayer => "#bgLogo",
            Element::FullLayer => "#bgLogoFull",
            Element::StaticLogo => "#staticLogo",
            Element::HeaderLogoStart => "#logoStart",
            Element::HeaderLogoEnd => "#logoEnd",
            Element::Header => ".site-header",
            Element::MindsetSection => "#section-mindset",
            Element::StrengthSection => "#section-strength",
            Element::ContactSection => ".contact-section",
            Element::SupportersSection => "#section-supporters",
        }
    }

    /// Whether the effects cannot run without this element.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Element::MarkLayer | Element::FullLayer | Element::StaticLogo
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
