//! Scroll state resolver (pure core).
//!
//! Maps a scroll offset, the viewport and a fresh anchor snapshot to the
//! complete [`VisualState`] of the page. No I/O, no logging, no globals:
//! the same inputs always produce the same output.
//!
//! # Phases
//! - **Zoom-in** (`scroll_y < animation_end`): scale eases from the hero
//!   scale down to the minimum while the logo slides in from the left.
//! - **Locked** (`scroll_y >= animation_end`): scale and horizontal
//!   position are fixed; the vertical position follows the live static
//!   placeholder so content reflow above it is tracked.
//!
//! Both phases produce identical values at `animation_end`.

pub mod easing;
pub mod header;
pub mod triggers;
pub mod visual_state;

pub use easing::{clamp_unit, ease_out_cubic, lerp, window_progress};
pub use triggers::TriggerPoints;
pub use visual_state::{
    css_number, HeaderLogoState, LayerState, LayerTransform, Phase, VisualState,
};

use crate::config::ResolverConfig;
use crate::model::{AnchorSnapshot, Element, MissingElement, Viewport};

/// Linear zoom progress for `scroll_y`, clamped to `[0, 1]`.
///
/// A non-positive `animation_end` yields 0.
pub fn zoom_progress(scroll_y: f64, animation_end: f64) -> f64 {
    if animation_end <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_y / animation_end)
}

/// Resolve the visual state for one scroll offset.
///
/// Negative offsets (overscroll) are treated as 0.
///
/// # Errors
///
/// Returns [`MissingElement`] when the static logo placeholder is absent.
/// Callers treat this as a no-op; every other missing anchor falls back to
/// a sentinel trigger point.
pub fn resolve(
    scroll_y: f64,
    viewport: Viewport,
    anchors: &AnchorSnapshot,
    config: &ResolverConfig,
) -> Result<VisualState, MissingElement> {
    let static_logo = anchors
        .static_logo
        .ok_or(MissingElement(Element::StaticLogo))?;
    let scroll_y = scroll_y.max(0.0);
    let is_mobile = viewport.is_mobile(config.mobile_breakpoint);
    let offset_y = config.offset_y_for(is_mobile);

    let triggers = TriggerPoints::compute(scroll_y, viewport, static_logo, anchors, config);
    let progress = zoom_progress(scroll_y, triggers.animation_end);

    let (phase, transform) = if scroll_y < triggers.animation_end {
        let eased = ease_out_cubic(progress);
        let transform = LayerTransform {
            translate_x_pct: lerp(config.start_x, config.end_x, eased),
            translate_y_px: offset_y * eased,
            scale: lerp(config.hero_scale, config.min_scale, eased),
        };
        (Phase::ZoomIn { progress, eased }, transform)
    } else {
        let delta_y =
            (static_logo.rect_center() - viewport.center_y()) - triggers.lock_drift + offset_y;
        let transform = LayerTransform {
            translate_x_pct: config.end_x,
            translate_y_px: delta_y,
            scale: config.min_scale,
        };
        (Phase::Locked, transform)
    };

    let fade = window_progress(scroll_y, triggers.fade_start, triggers.fade_end);
    let light_mode = scroll_y >= triggers.light_mode_at;

    Ok(VisualState {
        phase,
        triggers,
        mark: LayerState {
            transform,
            opacity: 1.0 - fade,
        },
        full: LayerState {
            transform: transform.aligned(&config.full_layer, viewport),
            opacity: fade,
        },
        header_logo: header::header_logo_state(progress, config),
        light_mode,
        header_visible: header::header_visible(light_mode, is_mobile, anchors, config),
    })
}
