//! Scroll-offset trigger points derived from live layout.
//!
//! Recomputed on every call: section offsets move with viewport size and
//! content reflow, so nothing here may be cached between invocations.

use crate::config::{LockReference, ResolverConfig};
use crate::model::{AnchorSnapshot, ElementBox, Viewport};
use serde::Serialize;

/// Scroll offsets at which the effects change behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerPoints {
    /// End of the zoom phase; the logo is locked from here on.
    pub animation_end: f64,
    /// Start of the mark-to-full crossfade window.
    ///
    /// Held at `fade_end` when the mindset section sits past the lock
    /// point; the crossfade is then a step at `fade_end`.
    pub fade_start: f64,
    /// End of the crossfade window (always `animation_end`).
    pub fade_end: f64,
    /// Light mode is on at and after this offset (`+inf` when unreachable).
    pub light_mode_at: f64,
    /// Placeholder centre minus viewport centre at the lock offset.
    ///
    /// Zero when the lock is derived from the placeholder and not floored.
    /// Subtracted in the locked phase so the handoff has no jump.
    pub lock_drift: f64,
}

impl TriggerPoints {
    /// Compute all trigger points for the current layout.
    ///
    /// `static_logo` is the live placeholder box; section boxes come from
    /// `anchors` and fall back to sentinels when absent.
    pub fn compute(
        scroll_y: f64,
        viewport: Viewport,
        static_logo: ElementBox,
        anchors: &AnchorSnapshot,
        config: &ResolverConfig,
    ) -> Self {
        let vh = viewport.height();
        let static_center_abs = static_logo.absolute_top(scroll_y) + static_logo.height / 2.0;

        let raw_end = match config.lock_reference {
            LockReference::StaticAnchor => static_center_abs - vh * config.lock_viewport_ratio,
            LockReference::StrengthSection => match anchors.strength {
                Some(section) => section.offset_top - vh * config.lock_viewport_ratio,
                None => vh * config.lock_fallback_viewports,
            },
        };
        // Phase 1 always gets at least one viewport of scroll range
        let animation_end = if raw_end < vh { vh } else { raw_end };

        let lock_drift = static_center_abs - animation_end - viewport.center_y();

        let fade_end = animation_end;
        let fade_start = anchors
            .mindset
            .map(|section| section.offset_top - vh * config.fade_start_viewport_ratio)
            .unwrap_or(0.0)
            .min(fade_end);

        let light_mode_at = anchors
            .contact
            .map(|section| section.offset_top - vh * config.light_mode_viewport_ratio)
            .unwrap_or(f64::INFINITY);

        Self {
            animation_end,
            fade_start,
            fade_end,
            light_mode_at,
            lock_drift,
        }
    }
}
