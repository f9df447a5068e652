//! Browser adapter (`web` feature).
//!
//! Implements [`Host`] over the live DOM and wires [`ScrollEffects`] to the
//! window's `load`, `scroll` and `resize` events. Reveal targets are also
//! watched by an `IntersectionObserver`, so layout changes that bring them
//! into view without a scroll still reveal them.

use super::{Host, PageEvent, ScrollEffects};
use crate::config::ResolverConfig;
use crate::model::{Element, ElementBox, MissingElement, Viewport};
use crate::resolver::LayerTransform;
use crate::reveal::{RevealKey, RevealStyle, DEFAULT_REVEAL_THRESHOLD, REVEALED_CLASS, REVEAL_SELECTORS};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// [`Host`] backed by `window` and `document`.
///
/// Elements are looked up by selector on every access so removed or
/// re-rendered nodes are never read through a stale handle. Reveal targets
/// are collected once, when the adapter is created.
pub struct WebHost {
    window: Window,
    document: Document,
    reveal: Vec<(RevealKey, HtmlElement)>,
    fallback_viewport: Viewport,
}

impl WebHost {
    /// Adapter for the current browsing context, or `None` outside a page.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let fallback_viewport = read_viewport(&window)?;

        let mut reveal = Vec::new();
        for selector in REVEAL_SELECTORS {
            let Ok(nodes) = document.query_selector_all(selector) else {
                continue;
            };
            for index in 0..nodes.length() {
                if let Some(el) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    reveal.push((RevealKey::new(format!("{selector}#{index}")), el));
                }
            }
        }

        Some(Self {
            window,
            document,
            reveal,
            fallback_viewport,
        })
    }

    fn find(&self, element: Element) -> Option<HtmlElement> {
        self.document
            .query_selector(element.selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn reveal_target(&self, key: &RevealKey) -> Option<&HtmlElement> {
        self.reveal.iter().find(|(k, _)| k == key).map(|(_, el)| el)
    }

    fn reveal_key_of(&self, target: &web_sys::Element) -> Option<RevealKey> {
        self.reveal
            .iter()
            .find(|(_, el)| el.is_same_node(Some(target.as_ref())))
            .map(|(key, _)| key.clone())
    }

    fn measure(&self, el: &HtmlElement) -> ElementBox {
        let rect = el.get_bounding_client_rect();
        ElementBox::new(rect.top(), rect.height(), rect.top() + self.scroll_y())
    }
}

fn read_viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Viewport::new(width, height).ok()
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        warn!(property, value, ?err, "Failed to write style");
    }
}

impl Host for WebHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport(&self) -> Viewport {
        read_viewport(&self.window).unwrap_or(self.fallback_viewport)
    }

    fn element_box(&self, element: Element) -> Option<ElementBox> {
        self.find(element).map(|el| self.measure(&el))
    }

    fn reveal_boxes(&self) -> Vec<(RevealKey, ElementBox)> {
        self.reveal
            .iter()
            .map(|(key, el)| (key.clone(), self.measure(el)))
            .collect()
    }

    fn set_transform(&mut self, element: Element, transform: &LayerTransform) {
        if let Some(el) = self.find(element) {
            set_style(&el, "transform", &transform.to_css());
        }
    }

    fn set_opacity(&mut self, element: Element, opacity: f64) {
        if let Some(el) = self.find(element) {
            set_style(&el, "opacity", &opacity.to_string());
        }
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        if let Some(body) = self.document.body() {
            if let Err(err) = body.class_list().toggle_with_force(class, enabled) {
                warn!(class, ?err, "Failed to toggle body class");
            }
        }
    }

    fn set_header_visible(&mut self, visible: bool) {
        if let Some(header) = self.find(Element::Header) {
            set_style(&header, "opacity", if visible { "1" } else { "0" });
            set_style(&header, "pointer-events", if visible { "auto" } else { "none" });
        }
    }

    fn prepare_reveal(&mut self, key: &RevealKey, style: &RevealStyle) {
        if let Some(el) = self.reveal_target(key) {
            set_style(el, "opacity", &style.opacity.to_string());
            set_style(el, "transform", &style.transform_css());
            set_style(el, "transition", style.transition);
        }
    }

    fn mark_revealed(&mut self, key: &RevealKey, style: &RevealStyle) {
        if let Some(el) = self.reveal_target(key) {
            set_style(el, "opacity", &style.opacity.to_string());
            set_style(el, "transform", &style.transform_css());
            if let Err(err) = el.class_list().add_1(REVEALED_CLASS) {
                warn!(%key, ?err, "Failed to add revealed class");
            }
        }
    }
}

struct Controller {
    host: WebHost,
    effects: ScrollEffects,
    // Held for the page's lifetime.
    _observer: Option<IntersectionObserver>,
}

/// Attach scroll effects to the current page and keep them running.
///
/// Does nothing outside a browsing context.
///
/// # Errors
///
/// Returns [`MissingElement`] (and leaves the page untouched) when either
/// logo layer is absent.
pub fn install(config: ResolverConfig, reveal_threshold: f64) -> Result<(), MissingElement> {
    let Some(mut host) = WebHost::current() else {
        debug!("No browsing context; scroll effects not installed");
        return Ok(());
    };
    let effects = ScrollEffects::attach(&mut host, config, reveal_threshold)?;
    let window = host.window.clone();
    let controller = Rc::new(RefCell::new(Controller {
        host,
        effects,
        _observer: None,
    }));

    for (name, event) in [
        ("load", PageEvent::Load),
        ("scroll", PageEvent::Scroll),
        ("resize", PageEvent::Resize),
    ] {
        let controller = Rc::clone(&controller);
        EventListener::new(&window, name, move |_| {
            // Handlers run to completion; a re-entrant event is dropped.
            if let Ok(mut guard) = controller.try_borrow_mut() {
                let Controller { host, effects, .. } = &mut *guard;
                effects.handle(host, event);
            }
        })
        .forget();
    }

    if let Err(err) = observe_reveals(&controller, reveal_threshold) {
        warn!(?err, "IntersectionObserver unavailable; reveals follow scroll events only");
    }

    Ok(())
}

/// Feed intersection entries for every reveal target into the latch.
fn observe_reveals(controller: &Rc<RefCell<Controller>>, threshold: f64) -> Result<(), JsValue> {
    let handler = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            // A dropped batch is caught by the next scroll event's rect check.
            let Ok(mut guard) = handler.try_borrow_mut() else {
                return;
            };
            let Controller { host, effects, .. } = &mut *guard;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(key) = host.reveal_key_of(&entry.target()) {
                    effects.reveal_intersection(host, &key, entry.intersection_ratio());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    let mut guard = controller.borrow_mut();
    for (_, el) in &guard.host.reveal {
        observer.observe(el);
    }
    guard._observer = Some(observer);
    callback.forget();
    Ok(())
}

/// JavaScript entry point: install with default settings.
#[wasm_bindgen(js_name = installScrollEffects)]
pub fn install_scroll_effects() {
    if let Err(missing) = install(ResolverConfig::default(), DEFAULT_REVEAL_THRESHOLD) {
        debug!(%missing, "Scroll effects not installed");
    }
}
