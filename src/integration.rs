//! Timeline integration.
//!
//! Drives a [`SimulatedPage`] through the same event sequence a browser
//! produces (attach, then one scroll event per step) and collects what was
//! applied at each offset. This is what the CLI prints and what the
//! acceptance tests assert against.

use crate::config::ResolvedConfig;
use crate::host::{Host, PageEvent, PageLayout, ScrollEffects, SimulatedPage};
use crate::model::{AppError, Element, MissingElement};
use crate::resolver::{css_number, Phase, VisualState};
use crate::reveal::RevealKey;
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;
use tracing::debug;

/// Most frames a single timeline may produce.
pub const MAX_FRAMES: usize = 100_000;

/// Invalid scroll range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TimelineError {
    /// Step must be finite and strictly positive.
    #[error("Step must be > 0 (got {0})")]
    NonPositiveStep(f64),

    /// `to` lies before `from`.
    #[error("Range end {to} is before start {from}")]
    InvertedRange {
        /// Requested start.
        from: f64,
        /// Requested end.
        to: f64,
    },

    /// The range would visit more than [`MAX_FRAMES`] offsets.
    #[error("Range yields {frames} frames (max {max}); use a larger step")]
    TooManyFrames {
        /// Frames the range would produce.
        frames: f64,
        /// The cap.
        max: usize,
    },
}

/// Inclusive range of scroll offsets visited in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRange {
    from: f64,
    to: f64,
    step: f64,
}

impl TimelineRange {
    /// Smart constructor.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive (or non-finite) step, `to < from`, and ranges
    /// longer than [`MAX_FRAMES`].
    pub fn new(from: f64, to: f64, step: f64) -> Result<Self, TimelineError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(TimelineError::NonPositiveStep(step));
        }
        if to < from || !from.is_finite() || !to.is_finite() {
            return Err(TimelineError::InvertedRange { from, to });
        }
        // Counted in f64 so a tiny step cannot overflow the cast
        let frames = last_index(from, to, step) + 1.0;
        if frames > MAX_FRAMES as f64 {
            return Err(TimelineError::TooManyFrames {
                frames,
                max: MAX_FRAMES,
            });
        }
        Ok(Self { from, to, step })
    }

    /// Number of offsets in the range.
    pub fn len(&self) -> usize {
        last_index(self.from, self.to, self.step) as usize + 1
    }

    /// Always false: a range holds at least `from`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First offset.
    pub fn start(&self) -> f64 {
        self.from
    }

    /// Last offset (inclusive).
    pub fn end(&self) -> f64 {
        self.to
    }

    /// Every offset in the range: `from`, `from + step`, ... up to `to`.
    pub fn offsets(&self) -> impl Iterator<Item = f64> {
        let Self { from, step, .. } = *self;
        (0..self.len()).map(move |i| from + i as f64 * step)
    }
}

fn last_index(from: f64, to: f64, step: f64) -> f64 {
    ((to - from) / step + 1e-9).floor()
}

/// Everything applied to the page at one scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Scroll offset after clamping to the document.
    pub scroll_y: f64,
    /// `zoom-in` or `locked`.
    pub phase: &'static str,
    /// Zoom progress (1 once locked).
    pub progress: f64,
    /// Mark layer transform.
    pub mark_transform: String,
    /// Mark layer opacity.
    pub mark_opacity: f64,
    /// Full layer transform.
    pub full_transform: String,
    /// Full layer opacity.
    pub full_opacity: f64,
    /// Start header logo opacity.
    pub header_logo_start_opacity: f64,
    /// End header logo opacity.
    pub header_logo_end_opacity: f64,
    /// Whether the body carries the light mode class.
    pub light_mode: bool,
    /// Whether the header is visible.
    pub header_visible: bool,
    /// Reveal targets that latched at this offset.
    pub revealed: Vec<RevealKey>,
}

impl Frame {
    /// Build a frame from a resolved state.
    pub fn new(scroll_y: f64, state: &VisualState, revealed: Vec<RevealKey>) -> Self {
        let progress = match state.phase {
            Phase::ZoomIn { progress, .. } => progress,
            Phase::Locked => 1.0,
        };
        Self {
            scroll_y,
            phase: state.phase.name(),
            progress: css_number(progress),
            mark_transform: state.mark.transform.to_css(),
            mark_opacity: css_number(state.mark.opacity),
            full_transform: state.full.transform.to_css(),
            full_opacity: css_number(state.full.opacity),
            header_logo_start_opacity: css_number(state.header_logo.start_opacity),
            header_logo_end_opacity: css_number(state.header_logo.end_opacity),
            light_mode: state.light_mode,
            header_visible: state.header_visible,
            revealed,
        }
    }

    /// Human-readable CSS rendition of the frame.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "/* scroll {}: {}, progress {} */",
            self.scroll_y, self.phase, self.progress
        );
        let _ = writeln!(
            out,
            "{} {{ transform: {}; opacity: {}; }}",
            Element::MarkLayer.selector(),
            self.mark_transform,
            self.mark_opacity
        );
        let _ = writeln!(
            out,
            "{} {{ transform: {}; opacity: {}; }}",
            Element::FullLayer.selector(),
            self.full_transform,
            self.full_opacity
        );
        let _ = writeln!(
            out,
            "{} {{ opacity: {}; }}",
            Element::HeaderLogoStart.selector(),
            self.header_logo_start_opacity
        );
        let _ = writeln!(
            out,
            "{} {{ opacity: {}; }}",
            Element::HeaderLogoEnd.selector(),
            self.header_logo_end_opacity
        );
        let (opacity, pointer) = if self.header_visible {
            (1, "auto")
        } else {
            (0, "none")
        };
        let _ = writeln!(
            out,
            "{} {{ opacity: {opacity}; pointer-events: {pointer}; }}",
            Element::Header.selector()
        );
        let _ = writeln!(
            out,
            "body {{ /* light-mode {} */ }}",
            if self.light_mode { "on" } else { "off" }
        );
        for key in &self.revealed {
            let _ = writeln!(out, "/* revealed: {key} */");
        }
        out
    }
}

/// Scroll a simulated page through `range`, one frame per offset.
///
/// The page starts scrolled to `range.start()`; the first frame is the
/// initial evaluation done when the effects attach.
///
/// # Errors
///
/// - [`AppError::Layout`] when the layout's viewport is invalid.
/// - [`AppError::MissingElement`] when a logo layer or the static logo
///   placeholder is absent.
pub fn timeline(
    layout: &PageLayout,
    config: &ResolvedConfig,
    range: TimelineRange,
) -> Result<Vec<Frame>, AppError> {
    let mut page = SimulatedPage::new(layout)?;
    page.scroll_to(range.start());

    let mut effects = ScrollEffects::attach(&mut page, config.resolver, config.reveal_threshold)?;
    let initial = effects
        .last_applied()
        .copied()
        .ok_or(MissingElement(Element::StaticLogo))?;

    let mut frames = Vec::with_capacity(range.len());
    frames.push(Frame::new(
        page.scroll_y(),
        &initial,
        page.applied().revealed.iter().cloned().collect(),
    ));

    for offset in range.offsets().skip(1) {
        page.scroll_to(offset);
        let update = effects.handle(&mut page, PageEvent::Scroll);
        let state = update.state.ok_or(MissingElement(Element::StaticLogo))?;
        frames.push(Frame::new(page.scroll_y(), &state, update.revealed));
    }

    debug!(
        frames = frames.len(),
        writes = page.applied().write_count,
        "Timeline simulated"
    );
    Ok(frames)
}
