//! Configuration module.
//!
//! [`ResolverConfig`] carries every tunable constant of the scroll resolver. It is
//! threaded explicitly into [`crate::resolver::resolve`]; nothing reads globals.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    LayerAlignmentSection, ResolvedConfig,
};

use serde::{Deserialize, Serialize};

/// What the lock point (end of the zoom phase) is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockReference {
    /// Vertical centre of the live static logo placeholder.
    #[default]
    StaticAnchor,
    /// Top of the strength section.
    StrengthSection,
}

impl std::str::FromStr for LockReference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static-anchor" => Ok(Self::StaticAnchor),
            "strength-section" => Ok(Self::StrengthSection),
            other => Err(format!(
                "unknown lock reference '{other}' (expected static-anchor or strength-section)"
            )),
        }
    }
}

/// How the full logo layer is positioned relative to the mark layer.
///
/// The full layer receives the mark layer's transform with these adjustments
/// applied, so the mark inside the wordmark lines up with the standalone mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerAlignment {
    /// Multiplier applied to the mark layer's scale.
    pub scale_ratio: f64,
    /// Added to translateX, in percent of the layer width.
    pub offset_x_pct: f64,
    /// Added to translateY, in percent of the viewport width.
    pub offset_y_vw: f64,
}

impl LayerAlignment {
    /// Both layers share one transform.
    pub const IDENTITY: Self = Self {
        scale_ratio: 1.0,
        offset_x_pct: 0.0,
        offset_y_vw: 0.0,
    };

    /// Preset for the current logo assets: the mark occupies 30.43% of the
    /// wordmark and sits 8% left and 1.1vw above its centre.
    pub const MARK_IN_WORDMARK: Self = Self {
        scale_ratio: 0.3043,
        offset_x_pct: -8.0,
        offset_y_vw: -1.1,
    };
}

impl Default for LayerAlignment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Tunable constants of the scroll resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Scale at scroll offset 0.
    pub hero_scale: f64,
    /// Scale once locked.
    pub min_scale: f64,
    /// translateX (%) at scroll offset 0.
    pub start_x: f64,
    /// translateX (%) once locked.
    pub end_x: f64,
    /// Vertical lift (px) once locked, wide viewports.
    pub offset_y: f64,
    /// Vertical lift (px) once locked, narrow viewports.
    pub mobile_offset_y: f64,
    /// Viewports narrower than this are treated as mobile.
    pub mobile_breakpoint: f64,
    /// Reference for the lock point.
    pub lock_reference: LockReference,
    /// Fraction of the viewport height at which the reference sits when locked.
    pub lock_viewport_ratio: f64,
    /// Lock point, in viewport heights, when the strength section is missing.
    pub lock_fallback_viewports: f64,
    /// Crossfade starts this fraction of a viewport before the mindset section.
    pub fade_start_viewport_ratio: f64,
    /// Light mode starts this fraction of a viewport before the contact section.
    pub light_mode_viewport_ratio: f64,
    /// How fast the header start logo fades relative to progress.
    pub header_fade_rate: f64,
    /// Mindset top (px) below which the mobile header hide window opens.
    pub header_hide_enter_px: f64,
    /// Supporters bottom (px) below which the mobile header hide window closes.
    pub header_hide_exit_px: f64,
    /// Full layer alignment relative to the mark layer.
    pub full_layer: LayerAlignment,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            hero_scale: 8.0,
            min_scale: 1.0,
            start_x: -60.0,
            end_x: 0.0,
            offset_y: 0.0,
            mobile_offset_y: 0.0,
            mobile_breakpoint: 768.0,
            lock_reference: LockReference::StaticAnchor,
            lock_viewport_ratio: 0.5,
            lock_fallback_viewports: 2.0,
            fade_start_viewport_ratio: 0.5,
            light_mode_viewport_ratio: 0.8,
            header_fade_rate: 3.0,
            header_hide_enter_px: 300.0,
            header_hide_exit_px: 100.0,
            full_layer: LayerAlignment::IDENTITY,
        }
    }
}

impl ResolverConfig {
    /// Vertical lift for the given viewport width.
    pub fn offset_y_for(&self, is_mobile: bool) -> f64 {
        if is_mobile {
            self.mobile_offset_y
        } else {
            self.offset_y
        }
    }
}
