//! Callback wrappers around the timestamp rate limiters.

use crate::core::rate_limit::{Debounce, Throttle};
use crate::dom::now_ms;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs `action` at most once per `interval_ms`; calls inside the window
/// are dropped, not queued.
pub fn throttle<F>(mut action: F, interval_ms: f64) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let mut gate = Throttle::new(interval_ms);
    move || {
        if gate.try_acquire(now_ms()) {
            action();
        }
    }
}

struct Debounced<F> {
    gate: Debounce,
    pending: Option<Timeout>,
    action: F,
}

/// Runs `action` once `wait_ms` pass without another call. With
/// `immediate`, the first call of a quiet period runs instead and the rest
/// are swallowed.
pub fn debounce<F>(action: F, wait_ms: u32, immediate: bool) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let state = Rc::new(RefCell::new(Debounced {
        gate: Debounce::new(f64::from(wait_ms), immediate),
        pending: None,
        action,
    }));
    move || {
        let weak = Rc::downgrade(&state);
        let timeout = Timeout::new(wait_ms, move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            // only the newest timer survives, so its deadline is the live one
            let fire = match state.gate.deadline() {
                Some(deadline) => state.gate.expire(deadline),
                None => false,
            };
            if fire {
                (state.action)();
            }
        });

        let mut state = state.borrow_mut();
        let call_now = state.gate.call(now_ms());
        // dropping the previous Timeout clears it
        state.pending = Some(timeout);
        if call_now {
            (state.action)();
        }
    }
}
