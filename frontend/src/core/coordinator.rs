use crate::config::LandingConfig;
use crate::core::active_section::{ActiveSectionSelector, NavSection};
use crate::core::back_to_top::BackToTopController;
use crate::core::dispatcher::{Dispatcher, Effect, Signal, SignalContext, SignalKind};
use crate::core::listeners::{
    ActiveSectionListener, AnchorScrollListener, BackToTopListener, InteractionListener,
    NavbarListener, ParallaxListener, RevealListener,
};
use crate::core::navbar::NavbarStateMachine;
use crate::core::parallax::{ParallaxEffect, ParallaxLayer};
use crate::core::reveal::{RevealDispatcher, RevealTarget};
use crate::core::viewport::ViewportProbe;

/// Everything enumerated from the document once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<NavSection>,
    pub link_targets: Vec<String>,
    pub reveal_targets: Vec<RevealTarget>,
    pub parallax_layers: Vec<ParallaxLayer>,
}

/// Single owner of the page's scroll-derived state.
pub struct LandingCoordinator {
    dispatcher: Dispatcher,
}

impl LandingCoordinator {
    pub fn new(config: &LandingConfig, layout: PageLayout) -> Self {
        let mut dispatcher = Dispatcher::new();
        dispatcher.subscribe_throttled(
            &[SignalKind::Scroll],
            config.navbar_throttle_ms,
            NavbarListener(NavbarStateMachine::new(config)),
        );
        dispatcher.subscribe_throttled(
            &[SignalKind::Scroll],
            config.navbar_throttle_ms,
            ActiveSectionListener(ActiveSectionSelector::new(
                layout.sections,
                layout.link_targets,
                config.anchor_line,
            )),
        );
        dispatcher.subscribe_throttled(
            &[SignalKind::Scroll, SignalKind::Timer, SignalKind::Click],
            config.back_to_top_throttle_ms,
            BackToTopListener(BackToTopController::new(config)),
        );
        dispatcher.subscribe_throttled(
            &[SignalKind::Scroll],
            config.parallax_throttle_ms,
            ParallaxListener(ParallaxEffect::new(layout.parallax_layers, config)),
        );
        dispatcher.subscribe(
            &[SignalKind::Intersection, SignalKind::Timer],
            RevealListener(RevealDispatcher::new(
                layout.reveal_targets,
                config.reveal_stagger_ms,
            )),
        );
        dispatcher.subscribe(
            &[SignalKind::Click],
            AnchorScrollListener {
                margin: config.anchor_scroll_margin,
            },
        );
        dispatcher.subscribe(&[SignalKind::Click], InteractionListener);

        log::debug!("landing coordinator ready with {} listeners", dispatcher.len());
        Self { dispatcher }
    }

    pub fn handle(&mut self, signal: &Signal, now: f64, viewport: &dyn ViewportProbe) -> Vec<Effect> {
        let ctx = SignalContext { now, viewport };
        self.dispatcher.dispatch(signal, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::{AnalyticsEvent, ClickTarget};
    use crate::core::back_to_top::BackToTopView;
    use crate::core::dispatcher::TimerToken;
    use crate::core::navbar::NavbarVisibility;
    use crate::core::parallax::ParallaxKind;
    use crate::core::viewport::fake::FakeViewport;

    fn layout() -> PageLayout {
        PageLayout {
            sections: vec![
                NavSection { id: "home".into() },
                NavSection {
                    id: "services".into(),
                },
            ],
            link_targets: vec!["home".into(), "services".into()],
            reveal_targets: vec![
                RevealTarget {
                    key: "card-1".into(),
                    parent: "grid".into(),
                    child_index: 0,
                },
                RevealTarget {
                    key: "card-2".into(),
                    parent: "grid".into(),
                    child_index: 1,
                },
            ],
            parallax_layers: vec![ParallaxLayer {
                key: "particles".into(),
                kind: ParallaxKind::HeroParticles,
            }],
        }
    }

    fn coordinator() -> LandingCoordinator {
        LandingCoordinator::new(&LandingConfig::default(), layout())
    }

    fn scroll(
        coordinator: &mut LandingCoordinator,
        now: f64,
        viewport: &FakeViewport,
    ) -> Vec<Effect> {
        coordinator.handle(
            &Signal::Scroll {
                offset: viewport.offset,
            },
            now,
            viewport,
        )
    }

    #[test]
    fn scroll_tick_fans_out_to_every_scroll_listener() {
        let mut coordinator = coordinator();
        let viewport = FakeViewport::at(700.0)
            .with_rect("home", -700.0, 100.0)
            .with_rect("services", 100.0, 900.0);
        let effects = scroll(&mut coordinator, 0.0, &viewport);

        assert!(effects.iter().any(|e| matches!(e,
            Effect::Navbar(state) if state.visibility == NavbarVisibility::Hidden && state.is_scrolled())));
        assert!(effects.contains(&Effect::ActiveLink(Some("services".into()))));
        assert!(effects.contains(&Effect::BackToTop(BackToTopView {
            displayed: true,
            opacity: 1.0
        })));
        assert!(effects.contains(&Effect::Parallax {
            key: "particles".into(),
            translate_y: -350.0
        }));
    }

    #[test]
    fn back_to_top_uses_its_own_slower_throttle() {
        let mut coordinator = coordinator();
        scroll(&mut coordinator, 0.0, &FakeViewport::at(700.0));
        let effects = scroll(&mut coordinator, 50.0, &FakeViewport::at(300.0));
        assert!(effects.iter().any(|e| matches!(e, Effect::Navbar(_))));
        assert!(!effects.iter().any(|e| matches!(e, Effect::BackToTop(_))));
    }

    #[test]
    fn back_to_top_grace_flows_through_timer_signal() {
        let mut coordinator = coordinator();
        scroll(&mut coordinator, 0.0, &FakeViewport::at(600.0));
        let low = FakeViewport::at(400.0);
        let effects = scroll(&mut coordinator, 150.0, &low);
        let token = effects
            .iter()
            .find_map(|e| match e {
                Effect::ScheduleTimer { token, delay_ms: 300 } => Some(token.clone()),
                _ => None,
            })
            .expect("grace timer scheduled");

        let effects = coordinator.handle(&Signal::Timer(token), 450.0, &low);
        assert_eq!(
            effects,
            vec![Effect::BackToTop(BackToTopView {
                displayed: false,
                opacity: 0.0
            })]
        );
    }

    #[test]
    fn back_to_top_click_scrolls_home_and_tracks() {
        let mut coordinator = coordinator();
        let effects = coordinator.handle(
            &Signal::Click(ClickTarget::BackToTop),
            0.0,
            &FakeViewport::at(900.0),
        );
        assert_eq!(
            effects,
            vec![
                Effect::ScrollTo { top: 0.0 },
                Effect::Track(AnalyticsEvent::back_to_top())
            ]
        );
    }

    #[test]
    fn intersection_reveals_and_staggers_siblings() {
        let mut coordinator = coordinator();
        let viewport = FakeViewport::at(0.0);
        let effects = coordinator.handle(
            &Signal::Intersection {
                key: "card-2".into(),
            },
            0.0,
            &viewport,
        );
        assert_eq!(
            effects,
            vec![
                Effect::Reveal {
                    key: "card-2".into()
                },
                Effect::ScheduleTimer {
                    token: TimerToken::Reveal("card-1".into()),
                    delay_ms: 0
                },
                Effect::ScheduleTimer {
                    token: TimerToken::Reveal("card-2".into()),
                    delay_ms: 100
                },
            ]
        );

        let first = coordinator.handle(&Signal::Timer(TimerToken::Reveal("card-1".into())), 1.0, &viewport);
        assert_eq!(first, vec![Effect::Reveal { key: "card-1".into() }]);
        let again = coordinator.handle(&Signal::Timer(TimerToken::Reveal("card-2".into())), 100.0, &viewport);
        assert!(again.is_empty());
    }

    #[test]
    fn navbar_anchor_scrolls_with_margin_and_collapses_menu() {
        let mut coordinator = coordinator();
        let viewport = FakeViewport::at(200.0).with_rect("services", 600.0, 1400.0);
        let effects = coordinator.handle(
            &Signal::Click(ClickTarget::Anchor {
                target_id: "services".into(),
                in_navbar: true,
            }),
            0.0,
            &viewport,
        );
        assert_eq!(
            effects,
            vec![
                Effect::CollapseMenu,
                Effect::ScrollTo { top: 700.0 },
                Effect::Track(AnalyticsEvent::navigation("services")),
            ]
        );
    }

    #[test]
    fn anchor_to_missing_target_does_nothing() {
        let mut coordinator = coordinator();
        let effects = coordinator.handle(
            &Signal::Click(ClickTarget::Anchor {
                target_id: "nowhere".into(),
                in_navbar: false,
            }),
            0.0,
            &FakeViewport::at(0.0),
        );
        assert!(effects.is_empty());
    }
}
