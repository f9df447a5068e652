//! Scroll effects controller.
//!
//! Owns the resolver configuration, the reveal latch and the last applied
//! state. Each page event reads fresh geometry from the [`Host`], resolves a
//! new [`VisualState`] and writes only what changed.

use super::Host;
use crate::config::ResolverConfig;
use crate::model::{AnchorSnapshot, Element, MissingElement, Viewport};
use crate::resolver::{resolve, VisualState};
use crate::reveal::{RevealKey, RevealStyle, RevealTracker};
use tracing::{debug, info, warn};

/// Body class toggled by the light mode trigger.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Host notifications that trigger re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Eager evaluation right after attaching.
    Init,
    /// Window finished loading (images may have changed layout).
    Load,
    /// Window scrolled.
    Scroll,
    /// Window resized.
    Resize,
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectsUpdate {
    /// Resolved state, or `None` when the placeholder was missing.
    pub state: Option<VisualState>,
    /// Reveal targets that latched during this event.
    pub revealed: Vec<RevealKey>,
}

/// Optional elements found at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OptionalElements {
    header_logo_start: bool,
    header_logo_end: bool,
    header: bool,
}

/// Attached scroll effects for one page.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ResolverConfig,
    optional: OptionalElements,
    reveal: RevealTracker,
    applied: Option<VisualState>,
}

impl ScrollEffects {
    /// Attach to a page and run the initial evaluation.
    ///
    /// Prepares every reveal target with its hidden starting style.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElement`] when either logo layer is absent; the
    /// caller should then leave the page alone.
    pub fn attach<H: Host + ?Sized>(
        host: &mut H,
        config: ResolverConfig,
        reveal_threshold: f64,
    ) -> Result<Self, MissingElement> {
        for layer in [Element::MarkLayer, Element::FullLayer] {
            if !host.has_element(layer) {
                return Err(MissingElement(layer));
            }
        }

        let optional = OptionalElements {
            header_logo_start: host.has_element(Element::HeaderLogoStart),
            header_logo_end: host.has_element(Element::HeaderLogoEnd),
            header: host.has_element(Element::Header),
        };

        let style = RevealStyle::default();
        let targets = host.reveal_boxes();
        for (key, _) in &targets {
            host.prepare_reveal(key, &style);
        }

        let absent: Vec<Element> = Element::ALL
            .into_iter()
            .filter(|element| !host.has_element(*element))
            .collect();
        if absent.iter().any(Element::is_mandatory) {
            warn!(?absent, "Placeholder missing; scroll updates skipped until it appears");
        }

        info!(
            header = optional.header,
            header_logos = optional.header_logo_start && optional.header_logo_end,
            reveal_targets = targets.len(),
            absent = absent.len(),
            "Scroll effects attached"
        );

        let mut effects = Self {
            config,
            optional,
            reveal: RevealTracker::new(reveal_threshold),
            applied: None,
        };
        effects.handle(host, PageEvent::Init);
        Ok(effects)
    }

    /// Re-evaluate after a page event.
    ///
    /// Runs to completion; never triggers further events.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: PageEvent) -> EffectsUpdate {
        let viewport = host.viewport();
        let scroll_y = host.scroll_y();

        let revealed = self.update_reveals(host, viewport);

        let anchors = AnchorSnapshot::capture(host);
        let state = match resolve(scroll_y, viewport, &anchors, &self.config) {
            Ok(state) => {
                self.apply(host, &state, scroll_y);
                Some(state)
            }
            Err(missing) => {
                debug!(?event, %missing, "Skipping scroll update");
                None
            }
        };

        EffectsUpdate { state, revealed }
    }

    /// Latch a reveal target reported by an intersection observer.
    ///
    /// `ratio` is the observed visible fraction. Returns true when this call
    /// revealed the target.
    pub fn reveal_intersection<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        key: &RevealKey,
        ratio: f64,
    ) -> bool {
        if !self.reveal.observe(key, ratio) {
            return false;
        }
        host.mark_revealed(key, &RevealStyle::revealed());
        debug!(%key, ratio, "Reveal target intersected");
        true
    }

    /// Last state written to the host.
    pub fn last_applied(&self) -> Option<&VisualState> {
        self.applied.as_ref()
    }

    /// Resolver configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Reveal latch state.
    pub fn reveal_tracker(&self) -> &RevealTracker {
        &self.reveal
    }

    fn update_reveals<H: Host + ?Sized>(&mut self, host: &mut H, viewport: Viewport) -> Vec<RevealKey> {
        let style = RevealStyle::revealed();
        let mut revealed = Vec::new();
        for (key, rect) in host.reveal_boxes() {
            if self.reveal.update(&key, rect, viewport) {
                host.mark_revealed(&key, &style);
                revealed.push(key);
            }
        }
        revealed
    }

    fn apply<H: Host + ?Sized>(&mut self, host: &mut H, state: &VisualState, scroll_y: f64) {
        let prev = self.applied.as_ref();

        if differs(prev, state, |s| s.mark.transform) {
            host.set_transform(Element::MarkLayer, &state.mark.transform);
        }
        if differs(prev, state, |s| s.mark.opacity) {
            host.set_opacity(Element::MarkLayer, state.mark.opacity);
        }
        if differs(prev, state, |s| s.full.transform) {
            host.set_transform(Element::FullLayer, &state.full.transform);
        }
        if differs(prev, state, |s| s.full.opacity) {
            host.set_opacity(Element::FullLayer, state.full.opacity);
        }

        if self.optional.header_logo_start && differs(prev, state, |s| s.header_logo.start_opacity) {
            host.set_opacity(Element::HeaderLogoStart, state.header_logo.start_opacity);
        }
        if self.optional.header_logo_end && differs(prev, state, |s| s.header_logo.end_opacity) {
            host.set_opacity(Element::HeaderLogoEnd, state.header_logo.end_opacity);
        }

        if differs(prev, state, |s| s.light_mode) {
            host.set_body_class(LIGHT_MODE_CLASS, state.light_mode);
            if prev.is_some() {
                debug!(light_mode = state.light_mode, scroll_y, "Light mode toggled");
            }
        }

        if self.optional.header && differs(prev, state, |s| s.header_visible) {
            host.set_header_visible(state.header_visible);
        }

        if differs(prev, state, |s| s.phase.name()) {
            debug!(
                phase = state.phase.name(),
                scroll_y,
                animation_end = state.triggers.animation_end,
                "Phase changed"
            );
        }

        self.applied = Some(*state);
    }
}

/// Whether the projected value changed since `prev` (always true on first write).
fn differs<T: PartialEq>(
    prev: Option<&VisualState>,
    next: &VisualState,
    project: impl Fn(&VisualState) -> T,
) -> bool {
    prev.map_or(true, |p| project(p) != project(next))
}
