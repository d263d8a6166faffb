//! Timestamp-driven throttle and debounce.
//!
//! Both types are pure state machines fed with the current time in
//! milliseconds. The DOM layer wraps them around real callbacks in
//! `dom::timers`; tests drive them with hand-picked timestamps.

/// Leading-edge throttle: the first call of a burst fires, every call that
/// lands inside the following `interval_ms` window is dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    window_ends_at: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            window_ends_at: None,
        }
    }

    /// Returns `true` when the call at `now` should run. A call that runs
    /// opens a new window.
    pub fn try_acquire(&mut self, now: f64) -> bool {
        match self.window_ends_at {
            Some(end) if now < end => false,
            _ => {
                self.window_ends_at = Some(now + self.interval_ms);
                true
            }
        }
    }
}

/// Trailing (or leading, with `immediate`) debounce.
///
/// `call` reports whether the action runs right away and re-arms the quiet
/// timer. The host fires `expire` once the timer it scheduled for
/// `deadline()` elapses; it reports whether the trailing run happens.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    immediate: bool,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64, immediate: bool) -> Self {
        Self {
            wait_ms,
            immediate,
            deadline: None,
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn call(&mut self, now: f64) -> bool {
        let call_now = self.immediate && self.deadline.is_none();
        self.deadline = Some(now + self.wait_ms);
        call_now
    }

    pub fn expire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                !self.immediate
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(throttle: &mut Throttle, calls: &[f64]) -> Vec<f64> {
        calls
            .iter()
            .copied()
            .filter(|t| throttle.try_acquire(*t))
            .collect()
    }

    #[test]
    fn throttle_keeps_leading_call_of_each_window() {
        let mut throttle = Throttle::new(10.0);
        assert_eq!(fired(&mut throttle, &[0.0, 5.0, 12.0, 18.0]), vec![0.0, 12.0]);
    }

    #[test]
    fn throttle_reopens_exactly_at_window_edge() {
        let mut throttle = Throttle::new(10.0);
        assert_eq!(fired(&mut throttle, &[0.0, 9.9, 10.0, 19.0, 20.0]), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn trailing_debounce_fires_once_after_quiet_period() {
        let mut debounce = Debounce::new(50.0, false);
        assert!(!debounce.call(0.0));
        assert!(!debounce.call(20.0));
        assert!(!debounce.call(40.0));
        // timer armed at 20 was superseded
        assert!(!debounce.expire(70.0));
        assert!(debounce.expire(90.0));
        assert_eq!(debounce.deadline(), None);
    }

    #[test]
    fn immediate_debounce_fires_first_call_only() {
        let mut debounce = Debounce::new(50.0, true);
        assert!(debounce.call(0.0));
        assert!(!debounce.call(10.0));
        assert!(!debounce.call(30.0));
        assert!(!debounce.expire(80.0));
        assert!(debounce.call(200.0));
    }
}
