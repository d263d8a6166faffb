//! Browser bindings: everything that reads or writes the live page.

pub mod accessibility;
pub mod actions;
pub mod analytics;
pub mod cookie_banner;
pub mod errors;
pub mod images;
pub mod layout;
pub mod lifecycle;
pub mod listener;
pub mod notification;
pub mod observer;
pub mod storage;
pub mod timers;
pub mod viewport;
pub mod widgets;

use crate::error::FrontendError;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, FrontendError> {
    web_sys::window().ok_or(FrontendError::NoWindow)
}

pub fn document() -> Result<Document, FrontendError> {
    window()?.document().ok_or(FrontendError::NoDocument)
}

pub fn body() -> Result<HtmlElement, FrontendError> {
    document()?
        .body()
        .ok_or_else(|| FrontendError::MissingElement("body".into()))
}

pub fn element_by_id(id: &str) -> Result<Element, FrontendError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| FrontendError::MissingElement(format!("#{id}")))
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, FrontendError> {
    use wasm_bindgen::JsCast;

    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Milliseconds from the page's monotonic clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
