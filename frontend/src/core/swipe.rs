#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Tracks one horizontal touch gesture on the carousel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn finish(&self, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
        let diff = self.start_x - end_x;
        if diff.abs() <= threshold {
            None
        } else if diff > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipes_past_threshold_change_slide() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        assert_eq!(swipe.finish(200.0, 50.0), Some(SwipeDirection::Next));
        assert_eq!(swipe.finish(400.0, 50.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn short_drags_are_taps() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        assert_eq!(swipe.finish(250.0, 50.0), None);
        assert_eq!(swipe.finish(349.0, 50.0), None);
    }
}
