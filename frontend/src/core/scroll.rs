/// One rate-limited observation of the page's vertical scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    pub offset: f64,
    pub previous_offset: f64,
}

impl ScrollSignal {
    pub fn is_scrolling_down(&self) -> bool {
        self.offset > self.previous_offset
    }
}

/// Depth-one scroll history. Each listener keeps its own, so "previous"
/// always means the offset that listener saw at its own prior tick.
#[derive(Debug, Clone, Default)]
pub struct ScrollHistory {
    last: f64,
}

impl ScrollHistory {
    pub fn advance(&mut self, offset: f64) -> ScrollSignal {
        // overscroll bounce can report negative offsets
        let offset = offset.max(0.0);
        let signal = ScrollSignal {
            offset,
            previous_offset: self.last,
        };
        self.last = offset;
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_tracks_previous_tick() {
        let mut history = ScrollHistory::default();
        let first = history.advance(120.0);
        assert_eq!(first.previous_offset, 0.0);
        assert!(first.is_scrolling_down());

        let second = history.advance(80.0);
        assert_eq!(second.previous_offset, 120.0);
        assert!(!second.is_scrolling_down());
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        let mut history = ScrollHistory::default();
        assert_eq!(history.advance(-14.0).offset, 0.0);
    }
}
