//! Resolver output: what each layer should look like at one scroll offset.

use super::triggers::TriggerPoints;
use crate::config::LayerAlignment;
use crate::model::Viewport;
use serde::Serialize;
use std::fmt;

/// Transform of one logo layer.
///
/// Rendered as `translate(X%, Ypx) rotate(0deg) scale(S)`; rotation is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerTransform {
    /// Horizontal translation in percent of the layer width.
    pub translate_x_pct: f64,
    /// Vertical translation in pixels.
    pub translate_y_px: f64,
    /// Unitless scale multiplier.
    pub scale: f64,
}

impl LayerTransform {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Transform of a layer aligned relative to this one.
    pub fn aligned(&self, alignment: &LayerAlignment, viewport: Viewport) -> Self {
        Self {
            translate_x_pct: self.translate_x_pct + alignment.offset_x_pct,
            translate_y_px: self.translate_y_px + alignment.offset_y_vw * viewport.width() / 100.0,
            scale: self.scale * alignment.scale_ratio,
        }
    }
}

impl fmt::Display for LayerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}%, {}px) rotate(0deg) scale({})",
            css_number(self.translate_x_pct),
            css_number(self.translate_y_px),
            css_number(self.scale)
        )
    }
}

/// Round to 4 decimals and fold negative zero, so CSS output is stable.
pub fn css_number(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Transform and opacity of one logo layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerState {
    /// Layer transform.
    pub transform: LayerTransform,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Opacities of the two header logos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderLogoState {
    /// Logo shown at the top of the page; gone by a third of the zoom.
    pub start_opacity: f64,
    /// Logo that takes over; fully visible once locked.
    pub end_opacity: f64,
}

/// Which half of the animation is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum Phase {
    /// Zooming in from the hero scale.
    ZoomIn {
        /// Linear progress through the zoom, in `[0, 1]`.
        progress: f64,
        /// Cubic ease-out of `progress`.
        eased: f64,
    },
    /// Locked at the minimum scale, tracking the static placeholder.
    Locked,
}

impl Phase {
    /// Short name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ZoomIn { .. } => "zoom-in",
            Phase::Locked => "locked",
        }
    }
}

/// Complete visual state for one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    /// Active phase.
    pub phase: Phase,
    /// Trigger points this state was resolved against.
    pub triggers: TriggerPoints,
    /// Mark variant of the background logo.
    pub mark: LayerState,
    /// Full wordmark variant of the background logo.
    pub full: LayerState,
    /// Header logo crossfade.
    pub header_logo: HeaderLogoState,
    /// Whether the body carries the `light-mode` class.
    pub light_mode: bool,
    /// Whether the header is visible and interactive.
    pub header_visible: bool,
}
