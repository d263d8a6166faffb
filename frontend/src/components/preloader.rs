use crate::config::LandingConfig;
use crate::core::preloader::{Preloader, PreloaderPhase};
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Default, PartialEq)]
struct PreloaderModel(Preloader);

enum PreloaderAction {
    Advance(f64),
    Fade,
    Hide,
}

impl Reducible for PreloaderModel {
    type Action = PreloaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PreloaderAction::Advance(increment) => next.advance(increment),
            PreloaderAction::Fade => next.fade(),
            PreloaderAction::Hide => next.hide(),
        }
        Rc::new(Self(next))
    }
}

/// Full-screen loader with a simulated progress bar.
#[function_component(PreloaderOverlay)]
pub fn preloader_overlay() -> Html {
    let model = use_reducer_eq(PreloaderModel::default);
    let phase = model.0.phase();

    {
        let model = model.clone();
        use_effect_with_deps(
            move |phase: &PreloaderPhase| {
                let config = LandingConfig::default();
                let dispatcher = model.dispatcher();
                let mut interval = None;
                let mut timeout = None;
                match phase {
                    PreloaderPhase::Loading => {
                        interval = Some(Interval::new(config.preloader_tick_ms, move || {
                            let increment = js_sys::Math::random() * config.preloader_max_increment;
                            dispatcher.dispatch(PreloaderAction::Advance(increment));
                        }));
                    }
                    PreloaderPhase::Complete => {
                        timeout = Some(Timeout::new(config.preloader_step_ms, move || {
                            dispatcher.dispatch(PreloaderAction::Fade)
                        }));
                    }
                    PreloaderPhase::FadingOut => {
                        timeout = Some(Timeout::new(config.preloader_step_ms, move || {
                            dispatcher.dispatch(PreloaderAction::Hide)
                        }));
                    }
                    PreloaderPhase::Hidden => {}
                }
                move || {
                    drop(interval);
                    drop(timeout);
                }
            },
            phase,
        );
    }

    let style = match phase {
        PreloaderPhase::Loading | PreloaderPhase::Complete => "opacity: 1;",
        PreloaderPhase::FadingOut => "opacity: 0; transition: opacity 0.5s ease;",
        PreloaderPhase::Hidden => "display: none;",
    };

    html! {
        <div id="preloader" {style}>
            <div class="loader-content">
                <div class="loader-logo">{"Apex"}<span class="text-warning">{"Capital"}</span></div>
                <div class="loading-bar">
                    <div class="loading-progress" style={format!("width: {}", model.0.bar_width())}></div>
                </div>
            </div>
        </div>
    }
}
