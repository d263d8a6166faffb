//! The scroll-driven page behaviours, each an independent listener.

use crate::core::active_section::ActiveSectionSelector;
use crate::core::analytics::{AnalyticsEvent, ClickTarget};
use crate::core::back_to_top::BackToTopController;
use crate::core::dispatcher::{Effect, Listener, Signal, SignalContext, TimerToken};
use crate::core::navbar::NavbarStateMachine;
use crate::core::parallax::ParallaxEffect;
use crate::core::reveal::RevealDispatcher;

pub struct NavbarListener(pub NavbarStateMachine);

impl Listener for NavbarListener {
    fn on_signal(&mut self, signal: &Signal, _: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        if let Signal::Scroll { offset } = signal {
            effects.push(Effect::Navbar(self.0.on_tick(*offset)));
        }
    }
}

pub struct ActiveSectionListener(pub ActiveSectionSelector);

impl Listener for ActiveSectionListener {
    fn on_signal(&mut self, signal: &Signal, ctx: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        if let Signal::Scroll { .. } = signal {
            effects.push(Effect::ActiveLink(self.0.tick(ctx.viewport)));
        }
    }
}

pub struct BackToTopListener(pub BackToTopController);

impl Listener for BackToTopListener {
    fn on_signal(&mut self, signal: &Signal, ctx: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        match signal {
            Signal::Scroll { offset } => {
                let timer = self.0.on_offset(*offset);
                effects.push(Effect::BackToTop(self.0.view()));
                if let Some(timer) = timer {
                    effects.push(Effect::ScheduleTimer {
                        token: TimerToken::BackToTopGrace(timer.generation),
                        delay_ms: timer.delay_ms,
                    });
                }
            }
            Signal::Timer(TimerToken::BackToTopGrace(generation)) => {
                self.0
                    .on_grace_elapsed(*generation, ctx.viewport.current_offset());
                effects.push(Effect::BackToTop(self.0.view()));
            }
            Signal::Click(ClickTarget::BackToTop) => {
                effects.push(Effect::ScrollTo { top: 0.0 });
                effects.push(Effect::Track(AnalyticsEvent::back_to_top()));
            }
            _ => {}
        }
    }
}

pub struct ParallaxListener(pub ParallaxEffect);

impl Listener for ParallaxListener {
    fn on_signal(&mut self, signal: &Signal, ctx: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        if let Signal::Scroll { offset } = signal {
            effects.extend(
                self.0
                    .offsets(*offset, ctx.viewport)
                    .into_iter()
                    .map(|(key, translate_y)| Effect::Parallax { key, translate_y }),
            );
        }
    }
}

pub struct RevealListener(pub RevealDispatcher);

impl Listener for RevealListener {
    fn on_signal(&mut self, signal: &Signal, _: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        match signal {
            Signal::Intersection { key } => {
                let plan = self.0.on_intersection(key);
                if let Some(key) = plan.immediate {
                    effects.push(Effect::Reveal { key });
                }
                for (key, delay_ms) in plan.staggered {
                    effects.push(Effect::ScheduleTimer {
                        token: TimerToken::Reveal(key),
                        delay_ms,
                    });
                }
            }
            Signal::Timer(TimerToken::Reveal(key)) => {
                if self.0.reveal(key) {
                    effects.push(Effect::Reveal { key: key.clone() });
                }
            }
            _ => {}
        }
    }
}

/// Smooth scrolling for in-page links.
pub struct AnchorScrollListener {
    pub margin: f64,
}

impl Listener for AnchorScrollListener {
    fn on_signal(&mut self, signal: &Signal, ctx: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        let Signal::Click(ClickTarget::Anchor {
            target_id,
            in_navbar,
        }) = signal
        else {
            return;
        };
        if *in_navbar {
            effects.push(Effect::CollapseMenu);
        }
        if let Some(rect) = ctx.viewport.bounds_of(target_id) {
            let document_top = rect.top + ctx.viewport.current_offset();
            effects.push(Effect::ScrollTo {
                top: (document_top - self.margin).max(0.0),
            });
            effects.push(Effect::Track(AnalyticsEvent::navigation(target_id)));
        }
    }
}

/// Generic button and card click tracking.
pub struct InteractionListener;

impl Listener for InteractionListener {
    fn on_signal(&mut self, signal: &Signal, _: &SignalContext<'_>, effects: &mut Vec<Effect>) {
        if let Signal::Click(target) = signal {
            if let Some(event) = target.interaction_event() {
                effects.push(Effect::Track(event));
            }
        }
    }
}
