/// Viewport-relative rectangle of an element, as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom,
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }

    /// Whether any part of the rect is inside a viewport of `height`.
    pub fn overlaps_viewport(&self, height: f64) -> bool {
        self.top < height && self.bottom > 0.0
    }
}

/// Live layout queries. Implementations must not cache: every call reflects
/// the latest layout pass.
pub trait ViewportProbe {
    /// Current vertical scroll distance, never negative.
    fn current_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Bounds of the element registered under `key`, or `None` when the
    /// element is missing or detached. Callers skip such elements for the
    /// current tick.
    fn bounds_of(&self, key: &str) -> Option<Rect>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{Rect, ViewportProbe};
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeViewport {
        pub offset: f64,
        pub height: f64,
        pub rects: HashMap<String, Rect>,
    }

    impl FakeViewport {
        pub fn at(offset: f64) -> Self {
            Self {
                offset,
                height: 800.0,
                rects: HashMap::new(),
            }
        }

        pub fn with_rect(mut self, key: &str, top: f64, bottom: f64) -> Self {
            self.rects.insert(key.to_string(), Rect::vertical(top, bottom));
            self
        }
    }

    impl ViewportProbe for FakeViewport {
        fn current_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn bounds_of(&self, key: &str) -> Option<Rect> {
            self.rects.get(key).copied()
        }
    }
}
