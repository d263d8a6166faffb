//! Signal fan-out. Listeners subscribe to signal kinds and answer each
//! signal with a list of effects; they never touch the page themselves.

use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, ClickTarget};
use crate::core::back_to_top::BackToTopView;
use crate::core::navbar::NavbarState;
use crate::core::rate_limit::Throttle;
use crate::core::viewport::ViewportProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Scroll,
    Intersection,
    Click,
    Timer,
}

/// Identifies a deferred callback so its expiry can be routed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerToken {
    BackToTopGrace(u64),
    Reveal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Scroll { offset: f64 },
    Intersection { key: String },
    Click(ClickTarget),
    Timer(TimerToken),
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Scroll { .. } => SignalKind::Scroll,
            Signal::Intersection { .. } => SignalKind::Intersection,
            Signal::Click(_) => SignalKind::Click,
            Signal::Timer(_) => SignalKind::Timer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navbar(NavbarState),
    ActiveLink(Option<String>),
    BackToTop(BackToTopView),
    Parallax { key: String, translate_y: f64 },
    Reveal { key: String },
    ScheduleTimer { token: TimerToken, delay_ms: u32 },
    ScrollTo { top: f64 },
    CollapseMenu,
    Track(AnalyticsEvent),
}

pub struct SignalContext<'a> {
    /// Milliseconds on the host clock.
    pub now: f64,
    pub viewport: &'a dyn ViewportProbe,
}

pub trait Listener {
    fn on_signal(&mut self, signal: &Signal, ctx: &SignalContext<'_>, effects: &mut Vec<Effect>);
}

struct Subscription {
    kinds: Vec<SignalKind>,
    scroll_throttle: Option<Throttle>,
    listener: Box<dyn Listener>,
}

impl Subscription {
    fn accepts(&mut self, signal: &Signal, now: f64) -> bool {
        let kind = signal.kind();
        if !self.kinds.contains(&kind) {
            return false;
        }
        match (&mut self.scroll_throttle, kind) {
            (Some(throttle), SignalKind::Scroll) => throttle.try_acquire(now),
            _ => true,
        }
    }
}

/// Owns every subscription. Listeners for the same signal run in
/// registration order.
#[derive(Default)]
pub struct Dispatcher {
    subscriptions: Vec<Subscription>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn subscribe(&mut self, kinds: &[SignalKind], listener: impl Listener + 'static) {
        self.subscriptions.push(Subscription {
            kinds: kinds.to_vec(),
            scroll_throttle: None,
            listener: Box::new(listener),
        });
    }

    /// Like `subscribe`, but scroll signals reach the listener at most once
    /// per `interval_ms`. Other kinds are never throttled.
    pub fn subscribe_throttled(
        &mut self,
        kinds: &[SignalKind],
        interval_ms: f64,
        listener: impl Listener + 'static,
    ) {
        self.subscriptions.push(Subscription {
            kinds: kinds.to_vec(),
            scroll_throttle: Some(Throttle::new(interval_ms)),
            listener: Box::new(listener),
        });
    }

    pub fn dispatch(&mut self, signal: &Signal, ctx: &SignalContext<'_>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for subscription in &mut self.subscriptions {
            if subscription.accepts(signal, ctx.now) {
                subscription.listener.on_signal(signal, ctx, &mut effects);
            }
        }
        effects
    }
}

/// Sends every `Track` effect to `sink`, in order.
pub fn forward_tracking(effects: &[Effect], sink: &dyn AnalyticsSink) {
    for effect in effects {
        if let Effect::Track(event) = effect {
            sink.track(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::MockAnalyticsSink;
    use crate::core::viewport::fake::FakeViewport;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Listener for Recorder {
        fn on_signal(&mut self, _: &Signal, _: &SignalContext<'_>, _: &mut Vec<Effect>) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        for name in ["first", "second", "third"] {
            dispatcher.subscribe(
                &[SignalKind::Click],
                Recorder {
                    name,
                    log: log.clone(),
                },
            );
        }
        let viewport = FakeViewport::at(0.0);
        let ctx = SignalContext {
            now: 0.0,
            viewport: &viewport,
        };
        dispatcher.dispatch(&Signal::Click(ClickTarget::BackToTop), &ctx);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn throttle_only_applies_to_scroll() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe_throttled(
            &[SignalKind::Scroll, SignalKind::Timer],
            100.0,
            Recorder {
                name: "throttled",
                log: log.clone(),
            },
        );
        let viewport = FakeViewport::at(0.0);
        for (now, signal) in [
            (0.0, Signal::Scroll { offset: 1.0 }),
            (10.0, Signal::Scroll { offset: 2.0 }),
            (20.0, Signal::Timer(TimerToken::BackToTopGrace(1))),
            (30.0, Signal::Timer(TimerToken::BackToTopGrace(2))),
            (120.0, Signal::Scroll { offset: 3.0 }),
            (130.0, Signal::Click(ClickTarget::BackToTop)),
        ] {
            let ctx = SignalContext {
                now,
                viewport: &viewport,
            };
            dispatcher.dispatch(&signal, &ctx);
        }
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn tracking_effects_reach_the_sink() {
        let mut sink = MockAnalyticsSink::new();
        sink.expect_track()
            .withf(|event| event.label == "Back to Top")
            .times(1)
            .return_const(());
        let effects = vec![
            Effect::ScrollTo { top: 0.0 },
            Effect::Track(AnalyticsEvent::back_to_top()),
            Effect::CollapseMenu,
        ];
        forward_tracking(&effects, &sink);
    }
}
