//! Error types for logoscroll.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions into [`AppError`] at the binary boundary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the command-line simulator
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`LayoutError`] - Page layout file read/parse/validation failures
//!   - [`TimelineError`] - Invalid scroll range requested from the simulator
//!   - `serde_json::Error` - Frame serialization failures
//!   - `std::io::Error` - Writing frames to stdout
//! - [`MissingElement`] - Soft failure: a mandatory page element is absent
//!
//! # Error Recovery Strategy
//!
//! [`MissingElement`] is **never fatal**. The page must keep working when markup is
//! incomplete: the effects controller logs the absence and leaves the DOM untouched.
//! Optional sections never produce an error at all; the resolver substitutes sentinel
//! trigger points instead. Everything else is a shell error and propagates to `main`.

use crate::config::ConfigError;
use crate::host::simulated::LayoutError;
use crate::integration::TimelineError;
use crate::logging::LoggingError;
use crate::model::element::Element;
use thiserror::Error;

/// Top-level application error for the simulator binary.
///
/// All shell error types convert into `AppError` via `From`, so `main` can use `?`
/// throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Page layout could not be loaded.
    ///
    /// **Recovery**: none. The simulator has nothing to resolve against.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// The requested scroll range is empty or has a non-positive step.
    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    /// A frame could not be serialized to JSON.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed (e.g. broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A mandatory page element is missing from the layout.
    ///
    /// In the browser this is a silent no-op; the simulator reports it because a layout
    /// file without logo layers is almost certainly a typo.
    #[error("{0}")]
    MissingElement(#[from] MissingElement),
}

/// A mandatory page element could not be found.
///
/// Returned when attaching to a page without both logo layers, and by the resolver when
/// the static logo placeholder is absent. Callers treat this as "do nothing this time".
///
/// # Examples
///
/// ```
/// use logoscroll::model::{Element, MissingElement};
///
/// let err = MissingElement(Element::StaticLogo);
/// assert!(err.to_string().contains("#staticLogo"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Required element missing: {0}")]
pub struct MissingElement(pub Element);
