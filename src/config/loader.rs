//! Configuration file loading with precedence handling.

use super::{LayerAlignment, LockReference, ResolverConfig};
use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/logoscroll/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Scale at scroll offset 0.
    #[serde(default)]
    pub hero_scale: Option<f64>,

    /// Scale once locked.
    #[serde(default)]
    pub min_scale: Option<f64>,

    /// translateX (%) at scroll offset 0.
    #[serde(default)]
    pub start_x: Option<f64>,

    /// translateX (%) once locked.
    #[serde(default)]
    pub end_x: Option<f64>,

    /// Locked vertical lift (px) on wide viewports.
    #[serde(default)]
    pub offset_y: Option<f64>,

    /// Locked vertical lift (px) on narrow viewports.
    #[serde(default)]
    pub mobile_offset_y: Option<f64>,

    /// Mobile width breakpoint (px).
    #[serde(default)]
    pub mobile_breakpoint: Option<f64>,

    /// Lock reference ("static-anchor" or "strength-section").
    #[serde(default)]
    pub lock_reference: Option<LockReference>,

    /// Viewport fraction at which the lock reference sits.
    #[serde(default)]
    pub lock_viewport_ratio: Option<f64>,

    /// Lock point in viewports when the strength section is missing.
    #[serde(default)]
    pub lock_fallback_viewports: Option<f64>,

    /// Crossfade lead before the mindset section, in viewports.
    #[serde(default)]
    pub fade_start_viewport_ratio: Option<f64>,

    /// Light mode lead before the contact section, in viewports.
    #[serde(default)]
    pub light_mode_viewport_ratio: Option<f64>,

    /// Header start logo fade rate.
    #[serde(default)]
    pub header_fade_rate: Option<f64>,

    /// Mobile header hide window opening threshold (px).
    #[serde(default)]
    pub header_hide_enter_px: Option<f64>,

    /// Mobile header hide window closing threshold (px).
    #[serde(default)]
    pub header_hide_exit_px: Option<f64>,

    /// Visible fraction at which reveal targets latch.
    #[serde(default)]
    pub reveal_threshold: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Full layer alignment section.
    #[serde(default)]
    pub full_layer: Option<LayerAlignmentSection>,
}

/// Named alignment presets.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPreset {
    /// Both layers share one transform.
    Identity,
    /// The mark sits inside the wordmark (current logo assets).
    MarkInWordmark,
}

/// Full layer alignment section from TOML.
///
/// Structure matches the TOML format:
/// ```toml
/// [full_layer]
/// preset = "mark-in-wordmark"
/// offset_y_vw = -1.5
/// ```
/// Explicit fields override the preset.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayerAlignmentSection {
    /// Starting preset (defaults to identity).
    #[serde(default)]
    pub preset: Option<AlignmentPreset>,

    /// Scale multiplier.
    #[serde(default)]
    pub scale_ratio: Option<f64>,

    /// translateX offset in percent.
    #[serde(default)]
    pub offset_x_pct: Option<f64>,

    /// translateY offset in viewport-width percent.
    #[serde(default)]
    pub offset_y_vw: Option<f64>,
}

impl LayerAlignmentSection {
    fn resolve(&self) -> LayerAlignment {
        let base = match self.preset {
            Some(AlignmentPreset::MarkInWordmark) => LayerAlignment::MARK_IN_WORDMARK,
            Some(AlignmentPreset::Identity) | None => LayerAlignment::IDENTITY,
        };
        LayerAlignment {
            scale_ratio: self.scale_ratio.unwrap_or(base.scale_ratio),
            offset_x_pct: self.offset_x_pct.unwrap_or(base.offset_x_pct),
            offset_y_vw: self.offset_y_vw.unwrap_or(base.offset_y_vw),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Resolver constants.
    pub resolver: ResolverConfig,
    /// Reveal latch threshold.
    pub reveal_threshold: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/logoscroll/logoscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("logoscroll").join("logoscroll.log")
    } else {
        PathBuf::from("logoscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/logoscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logoscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOGOSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/logoscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LOGOSCROLL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LOGOSCROLL_HERO_SCALE`: Override hero scale (ignored unless a finite number)
/// - `LOGOSCROLL_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(scale) = std::env::var("LOGOSCROLL_HERO_SCALE")
        .ok()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|scale| scale.is_finite())
    {
        config.resolver.hero_scale = scale;
    }

    if let Ok(path) = std::env::var("LOGOSCROLL_LOG_FILE") {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let base = defaults.resolver;
    let resolver = ResolverConfig {
        hero_scale: config.hero_scale.unwrap_or(base.hero_scale),
        min_scale: config.min_scale.unwrap_or(base.min_scale),
        start_x: config.start_x.unwrap_or(base.start_x),
        end_x: config.end_x.unwrap_or(base.end_x),
        offset_y: config.offset_y.unwrap_or(base.offset_y),
        mobile_offset_y: config.mobile_offset_y.unwrap_or(base.mobile_offset_y),
        mobile_breakpoint: config.mobile_breakpoint.unwrap_or(base.mobile_breakpoint),
        lock_reference: config.lock_reference.unwrap_or(base.lock_reference),
        lock_viewport_ratio: config
            .lock_viewport_ratio
            .unwrap_or(base.lock_viewport_ratio),
        lock_fallback_viewports: config
            .lock_fallback_viewports
            .unwrap_or(base.lock_fallback_viewports),
        fade_start_viewport_ratio: config
            .fade_start_viewport_ratio
            .unwrap_or(base.fade_start_viewport_ratio),
        light_mode_viewport_ratio: config
            .light_mode_viewport_ratio
            .unwrap_or(base.light_mode_viewport_ratio),
        header_fade_rate: config.header_fade_rate.unwrap_or(base.header_fade_rate),
        header_hide_enter_px: config
            .header_hide_enter_px
            .unwrap_or(base.header_hide_enter_px),
        header_hide_exit_px: config
            .header_hide_exit_px
            .unwrap_or(base.header_hide_exit_px),
        full_layer: config
            .full_layer
            .as_ref()
            .map(LayerAlignmentSection::resolve)
            .unwrap_or(base.full_layer),
    };

    ResolvedConfig {
        resolver,
        reveal_threshold: config.reveal_threshold.unwrap_or(defaults.reveal_threshold),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    hero_scale_override: Option<f64>,
    lock_reference_override: Option<LockReference>,
) -> ResolvedConfig {
    if let Some(scale) = hero_scale_override {
        config.resolver.hero_scale = scale;
    }

    if let Some(reference) = lock_reference_override {
        config.resolver.lock_reference = reference;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
