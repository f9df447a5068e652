//! Headless in-memory page.
//!
//! Built from a [`PageLayout`] description (TOML or JSON). Elements are
//! placed in document coordinates; bounding boxes are derived from the
//! current scroll offset on every read, like a real layout engine would.
//! Writes are recorded in [`AppliedStyles`] instead of touching a DOM.

use super::{Host, LIGHT_MODE_CLASS};
use crate::model::{Element, ElementBox, InvalidViewport, Viewport};
use crate::resolver::LayerTransform;
use crate::reveal::{RevealKey, RevealStyle};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a page layout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Failed to read the layout file.
    #[error("Failed to read layout file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Layout contents are not valid TOML/JSON for a [`PageLayout`].
    #[error("Invalid layout in {path}: {reason}")]
    ParseError {
        /// Path (or `<inline>`) with invalid contents.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Viewport dimensions are not positive.
    #[error(transparent)]
    InvalidViewport(#[from] InvalidViewport),
}

/// Viewport section of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportSpec {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Placement of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxSpec {
    /// Document top for in-flow elements, viewport top for fixed ones.
    pub top: f64,
    /// Height in pixels.
    pub height: f64,
    /// Fixed-position elements do not move with scroll.
    #[serde(default)]
    pub fixed: bool,
}

impl BoxSpec {
    /// In-flow element at document offset `top`.
    pub fn in_flow(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            fixed: false,
        }
    }

    /// Fixed element at viewport offset `top`.
    pub fn fixed(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            fixed: true,
        }
    }

    fn at(&self, scroll_y: f64) -> ElementBox {
        if self.fixed {
            ElementBox::new(self.top, self.height, self.top + scroll_y)
        } else {
            ElementBox::in_flow(self.top, self.height, scroll_y)
        }
    }
}

/// One reveal target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealSpec {
    /// Key used in output and for latching.
    pub key: String,
    /// Document top.
    pub top: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Page layout description.
///
/// ```toml
/// document_height = 6000
///
/// [viewport]
/// width = 1280
/// height = 900
///
/// [elements.mark-layer]
/// top = 0
/// height = 900
/// fixed = true
///
/// [elements.static-logo]
/// top = 3000
/// height = 100
///
/// [[reveal]]
/// key = "hero-headline"
/// top = 400
/// height = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageLayout {
    /// Initial viewport.
    pub viewport: ViewportSpec,
    /// Total document height; inferred from the lowest element when absent.
    #[serde(default)]
    pub document_height: Option<f64>,
    /// Element placements keyed by element name.
    #[serde(default)]
    pub elements: BTreeMap<Element, BoxSpec>,
    /// Reveal-on-scroll targets.
    #[serde(default)]
    pub reveal: Vec<RevealSpec>,
}

impl PageLayout {
    /// Parse a TOML layout.
    pub fn from_toml_str(contents: &str) -> Result<Self, LayoutError> {
        Self::parse_toml(contents, Path::new("<inline>"))
    }

    /// Parse a JSON layout.
    pub fn from_json_str(contents: &str) -> Result<Self, LayoutError> {
        Self::parse_json(contents, Path::new("<inline>"))
    }

    /// Load a layout file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| LayoutError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&contents, path)
        } else {
            Self::parse_toml(&contents, path)
        }
    }

    fn parse_toml(contents: &str, path: &Path) -> Result<Self, LayoutError> {
        toml::from_str(contents).map_err(|e| LayoutError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn parse_json(contents: &str, path: &Path) -> Result<Self, LayoutError> {
        serde_json::from_str(contents).map_err(|e| LayoutError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Everything written to a [`SimulatedPage`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedStyles {
    /// CSS transform per element.
    pub transforms: BTreeMap<Element, String>,
    /// Opacity per element.
    pub opacities: BTreeMap<Element, f64>,
    /// Classes currently on the body.
    pub body_classes: BTreeSet<String>,
    /// Header visibility, once written.
    pub header_visible: Option<bool>,
    /// Reveal targets that received their hidden style.
    pub prepared_reveals: BTreeSet<RevealKey>,
    /// Reveal targets carrying the revealed class.
    pub revealed: BTreeSet<RevealKey>,
    /// Last inline style written to each reveal target.
    pub reveal_styles: BTreeMap<RevealKey, RevealStyle>,
    /// Total number of writes.
    pub write_count: usize,
}

impl AppliedStyles {
    /// Whether the body is in light mode.
    pub fn is_light_mode(&self) -> bool {
        self.body_classes.contains(LIGHT_MODE_CLASS)
    }
}

/// In-memory [`Host`].
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    viewport: Viewport,
    document_height: Option<f64>,
    scroll_y: f64,
    elements: BTreeMap<Element, BoxSpec>,
    reveal: Vec<RevealSpec>,
    applied: AppliedStyles,
}

impl SimulatedPage {
    /// Build a page scrolled to the top.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidViewport`] for non-positive dimensions.
    pub fn new(layout: &PageLayout) -> Result<Self, LayoutError> {
        let viewport = Viewport::new(layout.viewport.width, layout.viewport.height)?;
        Ok(Self {
            viewport,
            document_height: layout.document_height,
            scroll_y: 0.0,
            elements: layout.elements.clone(),
            reveal: layout.reveal.clone(),
            applied: AppliedStyles::default(),
        })
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.document_height.unwrap_or_else(|| {
            let elements = self
                .elements
                .values()
                .filter(|spec| !spec.fixed)
                .map(|spec| spec.top + spec.height);
            let reveals = self.reveal.iter().map(|spec| spec.top + spec.height);
            elements
                .chain(reveals)
                .fold(self.viewport.height(), f64::max)
        })
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height()).max(0.0)
    }

    /// Scroll to `y`, clamped to the document. Returns the new offset.
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.scroll_y
    }

    /// Change the viewport, keeping the scroll offset within the document.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Reflow: move or resize an element (inserting it if absent).
    pub fn move_element(&mut self, element: Element, spec: BoxSpec) {
        self.elements.insert(element, spec);
    }

    /// Remove an element from the page.
    pub fn remove_element(&mut self, element: Element) {
        self.elements.remove(&element);
    }

    /// Styles written so far.
    pub fn applied(&self) -> &AppliedStyles {
        &self.applied
    }
}

impl Host for SimulatedPage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_box(&self, element: Element) -> Option<ElementBox> {
        self.elements.get(&element).map(|spec| spec.at(self.scroll_y))
    }

    fn reveal_boxes(&self) -> Vec<(RevealKey, ElementBox)> {
        self.reveal
            .iter()
            .map(|spec| {
                (
                    RevealKey::new(spec.key.clone()),
                    ElementBox::in_flow(spec.top, spec.height, self.scroll_y),
                )
            })
            .collect()
    }

    fn set_transform(&mut self, element: Element, transform: &LayerTransform) {
        self.applied.transforms.insert(element, transform.to_css());
        self.applied.write_count += 1;
    }

    fn set_opacity(&mut self, element: Element, opacity: f64) {
        self.applied.opacities.insert(element, opacity);
        self.applied.write_count += 1;
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.applied.body_classes.insert(class.to_string());
        } else {
            self.applied.body_classes.remove(class);
        }
        self.applied.write_count += 1;
    }

    fn set_header_visible(&mut self, visible: bool) {
        self.applied.header_visible = Some(visible);
        self.applied.write_count += 1;
    }

    fn prepare_reveal(&mut self, key: &RevealKey, style: &RevealStyle) {
        self.applied.prepared_reveals.insert(key.clone());
        self.applied.reveal_styles.insert(key.clone(), style.clone());
        self.applied.write_count += 1;
    }

    fn mark_revealed(&mut self, key: &RevealKey, style: &RevealStyle) {
        self.applied.revealed.insert(key.clone());
        self.applied.reveal_styles.insert(key.clone(), style.clone());
        self.applied.write_count += 1;
    }
}
