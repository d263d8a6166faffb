use crate::core::viewport::{Rect, ViewportProbe};
use web_sys::{Document, Window};

/// Reads scroll position and element bounds straight from layout.
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl ViewportProbe for DomViewport {
    fn current_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0).max(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn bounds_of(&self, key: &str) -> Option<Rect> {
        if key.is_empty() {
            return None;
        }
        let element = self.document.get_element_by_id(key)?;
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
            left: rect.left(),
            right: rect.right(),
        })
    }
}
