use folio_protocol::Viewport;
use gloo::events::{EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

pub const SECTION_SELECTOR: &str = ".h-scroll";
pub const STICKY_SELECTOR: &str = ".h-sticky";
pub const TRACK_SELECTOR: &str = ".h-track";
pub const GRID_SELECTOR: &str = ".v-grid";
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const DATA_ELEMENT_ID: &str = "portfolio-data";
pub const SERIES_BUTTON_SELECTOR: &str = "[data-series]";
pub const SERIES_ATTRIBUTE: &str = "data-series";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// First element matching `selector`, if it is an `HtmlElement`.
pub fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Every `HtmlElement` matching `selector`, in document order.
pub fn find_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(property, value)
}

/// Listener options for scroll and pointer handlers that never cancel.
pub fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}
