//! Small wrappers over `web_sys` for the handful of imperative DOM touches
//! the page needs. Missing nodes are silently ignored.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current vertical scroll offset of the window
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Suspend or restore scrolling of the page behind overlays
pub fn set_body_scroll_suspended(suspended: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let value = if suspended { "hidden" } else { "auto" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}

/// Smooth-scroll to the element with the given id. Returns false if there is none.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Trimmed text content of the first descendant matching `selector`
pub fn child_text(parent: &Element, selector: &str) -> String {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

pub fn child_attribute(parent: &Element, selector: &str, attribute: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute(attribute))
}

/// All elements matching `selector` in document order
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

