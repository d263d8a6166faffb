//! Count-up animation for the stats band, sampled from elapsed time.

pub const COUNTER_DURATION_MS: f64 = 2500.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    started_at: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, started_at: f64) -> Self {
        Self { target, started_at }
    }

    /// Value shown at `now`. The count advances by `target / (2500 / 16)`
    /// per whole 16 ms frame and snaps to the target once it reaches it.
    pub fn sample(&self, now: f64) -> CounterFrame {
        let elapsed = (now - self.started_at).max(0.0);
        let frames = (elapsed / COUNTER_FRAME_MS).floor();
        let step = self.target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS);
        let current = frames * step;
        if current >= self.target as f64 {
            CounterFrame {
                value: self.target,
                done: true,
            }
        } else {
            CounterFrame {
                value: current.floor() as u64,
                done: false,
            }
        }
    }
}

/// Parses a `data-count` attribute the way `parseInt` reads leading digits.
pub fn parse_count(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_in_whole_frames() {
        let counter = CounterAnimation::new(1000, 100.0);
        assert_eq!(counter.sample(100.0).value, 0);
        assert_eq!(counter.sample(115.9).value, 0);
        // one frame = 1000 / 156.25 = 6.4
        assert_eq!(counter.sample(116.0).value, 6);
        assert_eq!(counter.sample(100.0 + 16.0 * 10.0).value, 64);
    }

    #[test]
    fn lands_exactly_on_target() {
        let counter = CounterAnimation::new(250, 0.0);
        let end = counter.sample(COUNTER_DURATION_MS + COUNTER_FRAME_MS);
        assert_eq!(end, CounterFrame { value: 250, done: true });
        assert!(!counter.sample(COUNTER_DURATION_MS / 2.0).done);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert!(CounterAnimation::new(0, 0.0).sample(0.0).done);
    }

    #[test]
    fn parses_leading_digits() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count(" 98%"), Some(98));
        assert_eq!(parse_count("n/a"), None);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(2_500_000), "2,500,000");
    }
}
