//! Header logo crossfade and header visibility.

use super::visual_state::HeaderLogoState;
use crate::config::ResolverConfig;
use crate::model::AnchorSnapshot;

/// Header logo opacities from linear zoom progress (not the eased value).
pub fn header_logo_state(progress: f64, config: &ResolverConfig) -> HeaderLogoState {
    HeaderLogoState {
        start_opacity: (1.0 - config.header_fade_rate * progress).max(0.0),
        end_opacity: progress,
    }
}

/// Whether the header is shown.
///
/// Hidden in light mode. On narrow viewports it is also hidden while the
/// mindset section is near the top and the supporters section has not yet
/// scrolled out. A missing mindset section never opens that window; a
/// missing supporters section never closes it.
pub fn header_visible(
    light_mode: bool,
    is_mobile: bool,
    anchors: &AnchorSnapshot,
    config: &ResolverConfig,
) -> bool {
    if light_mode {
        return false;
    }
    if !is_mobile {
        return true;
    }

    let mindset_near_top = anchors
        .mindset
        .is_some_and(|section| section.rect_top < config.header_hide_enter_px);
    let supporters_gone = anchors
        .supporters
        .is_some_and(|section| section.rect_bottom() < config.header_hide_exit_px);

    !(mindset_near_top && !supporters_gone)
}
