//! Viewport and element geometry newtypes

use serde::{Deserialize, Serialize};

/// Error returned by the [`Viewport`] smart constructor.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Viewport dimensions must be finite and > 0 (got {width}x{height})")]
pub struct InvalidViewport {
    /// Rejected width.
    pub width: f64,
    /// Rejected height.
    pub height: f64,
}

/// Viewport dimensions in CSS pixels.
///
/// # Invariants
/// - Both dimensions are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Smart constructor that validates both dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidViewport> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(InvalidViewport { width, height })
        }
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical midpoint in viewport-relative coordinates.
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Narrow-viewport check against a width breakpoint.
    pub fn is_mobile(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }
}

/// Live bounding box of a page element.
///
/// `rect_top` is viewport-relative (what a bounding-client-rect query
/// returns); `offset_top` is relative to the document top.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBox {
    /// Top edge relative to the viewport top.
    pub rect_top: f64,
    /// Rendered height.
    pub height: f64,
    /// Top edge relative to the document top.
    pub offset_top: f64,
}

impl ElementBox {
    /// Create a new element box.
    pub fn new(rect_top: f64, height: f64, offset_top: f64) -> Self {
        Self {
            rect_top,
            height,
            offset_top,
        }
    }

    /// Box for an in-flow element at `document_top`, seen from `scroll_y`.
    pub fn in_flow(document_top: f64, height: f64, scroll_y: f64) -> Self {
        Self::new(document_top - scroll_y, height, document_top)
    }

    /// Bottom edge relative to the viewport top.
    pub fn rect_bottom(&self) -> f64 {
        self.rect_top + self.height
    }

    /// Vertical midpoint relative to the viewport top.
    pub fn rect_center(&self) -> f64 {
        self.rect_top + self.height / 2.0
    }

    /// Document-relative top derived from the live rect and scroll offset.
    pub fn absolute_top(&self, scroll_y: f64) -> f64 {
        self.rect_top + scroll_y
    }
}

/// Fresh snapshot of the anchors the resolver measures against.
///
/// Every field is optional; the resolver decides which absences are fatal
/// (only `static_logo`) and which fall back to sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorSnapshot {
    /// In-flow placeholder the locked logo tracks.
    pub static_logo: Option<ElementBox>,
    /// Section whose arrival starts the mark-to-full crossfade.
    pub mindset: Option<ElementBox>,
    /// Section used as lock reference in `strength-section` mode.
    pub strength: Option<ElementBox>,
    /// Section that switches the page to light mode.
    pub contact: Option<ElementBox>,
    /// Section whose exit closes the mobile header hide window.
    pub supporters: Option<ElementBox>,
}
