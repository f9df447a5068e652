//! One-shot reveal-on-scroll latch.
//!
//! Targets start hidden and shifted down. The first time a target is at
//! least [`DEFAULT_REVEAL_THRESHOLD`] visible it is revealed, and it stays
//! revealed for the rest of the page's life.

use crate::model::{ElementBox, Viewport};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Visible fraction at which a target latches.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Class added to a target once revealed.
pub const REVEALED_CLASS: &str = "in-view";

/// Selectors of the elements that reveal on scroll.
pub const REVEAL_SELECTORS: [&str; 2] = [".hero-headline", ".manifesto-text"];

/// Identifies one reveal target (e.g. a selector plus an index).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RevealKey(String);

impl RevealKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inline style of a reveal target.
///
/// [`Default`] is the hidden starting style; [`RevealStyle::revealed`] is
/// written over it when the target latches, since inline declarations win
/// over the revealed class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealStyle {
    /// Opacity.
    pub opacity: f64,
    /// Downward offset in pixels.
    pub translate_y_px: f64,
    /// CSS transition between the hidden and revealed styles.
    pub transition: &'static str,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            translate_y_px: 20.0,
            transition: "opacity 0.8s ease, transform 0.8s ease",
        }
    }
}

impl RevealStyle {
    /// Final style of a latched target: opaque and in place.
    pub fn revealed() -> Self {
        Self {
            opacity: 1.0,
            translate_y_px: 0.0,
            ..Self::default()
        }
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y_px)
    }
}

/// Fraction of `rect`'s height inside the viewport, along the scroll axis.
///
/// Zero-height boxes count as fully visible while their top lies inside the
/// viewport.
pub fn intersection_ratio(rect: ElementBox, viewport: Viewport) -> f64 {
    let top = rect.rect_top.max(0.0);
    let bottom = rect.rect_bottom().min(viewport.height());

    if rect.height <= 0.0 {
        let inside = rect.rect_top >= 0.0 && rect.rect_top <= viewport.height();
        return if inside { 1.0 } else { 0.0 };
    }

    ((bottom - top).max(0.0) / rect.height).min(1.0)
}

/// Tracks which targets have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: BTreeSet<RevealKey>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    /// Create a tracker latching at `threshold` (clamped into `(0, 1]`).
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::MIN_POSITIVE, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        Self {
            threshold,
            revealed: BTreeSet::new(),
        }
    }

    /// The latch threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed the latest geometry for `key`.
    ///
    /// Returns `true` exactly once: the first time the target is visible
    /// enough. Already revealed targets are never reconsidered.
    pub fn update(&mut self, key: &RevealKey, rect: ElementBox, viewport: Viewport) -> bool {
        self.observe(key, intersection_ratio(rect, viewport))
    }

    /// Latch `key` from an externally measured visible fraction.
    ///
    /// Returns true only on the call that latches.
    pub fn observe(&mut self, key: &RevealKey, ratio: f64) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.revealed.insert(key.clone());
            true
        } else {
            false
        }
    }

    /// Whether `key` has latched.
    pub fn is_revealed(&self, key: &RevealKey) -> bool {
        self.revealed.contains(key)
    }

    /// Number of revealed targets.
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
