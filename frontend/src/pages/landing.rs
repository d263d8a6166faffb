use crate::components::back_to_top::BackToTop;
use crate::components::contact::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::preloader::PreloaderOverlay;
use crate::components::sections::{Features, Portfolio, Pricing, Process, Services};
use crate::components::testimonials::Testimonials;
use crate::config::LandingConfig;
use crate::core::dispatcher::Signal;
use crate::dom::analytics::BrowserAnalytics;
use crate::dom::layout::{classify_click, scan_layout};
use crate::dom::listener::DomListener;
use crate::dom::observer::{observe_entries, ObserverHandle};
use crate::dom::timers::{debounce, throttle};
use crate::dom::widgets::{self, Chart};
use crate::dom::{self, accessibility, actions, cookie_banner, errors, images, lifecycle};
use crate::error::FrontendError;
use crate::runtime::{PageRuntime, PageState};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

const RESIZE_THROTTLE_MS: f64 = 100.0;
const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Everything wired up once the page initialises. Dropping it detaches
/// every listener and observer.
struct PageWiring {
    _runtime: Rc<PageRuntime>,
    _listeners: Vec<DomListener>,
    _observers: Vec<ObserverHandle>,
    chart: Option<Chart>,
}

impl Drop for PageWiring {
    fn drop(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}

fn logged<T>(what: &str, result: Result<T, FrontendError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{what}: {e}");
            None
        }
    }
}

fn wire_page(config: &LandingConfig, state: UseReducerDispatcher<PageState>) -> Result<PageWiring, FrontendError> {
    let window = dom::window()?;
    let document = dom::document()?;
    dom::body()?.class_list().add_1("loaded")?;

    let layout = scan_layout()?;
    let reveal_elements = layout
        .reveal_targets
        .iter()
        .filter_map(|target| document.get_element_by_id(&target.key))
        .collect::<Vec<_>>();
    let runtime = PageRuntime::new(config, layout, Box::new(BrowserAnalytics::new()), state)?;

    let mut listeners = Vec::new();
    let on_scroll = runtime.clone();
    listeners.push(DomListener::new(&window, "scroll", move |_| on_scroll.tick())?);

    let mut leading = throttle({
        let runtime = runtime.clone();
        move || runtime.tick()
    }, RESIZE_THROTTLE_MS);
    let mut trailing = debounce({
        let runtime = runtime.clone();
        move || runtime.tick()
    }, RESIZE_DEBOUNCE_MS, false);
    listeners.push(DomListener::new(&window, "resize", move |_| {
        leading();
        trailing();
    })?);

    let on_click = runtime.clone();
    listeners.push(DomListener::new(&document, "click", move |event| {
        for target in classify_click(&event) {
            on_click.dispatch(Signal::Click(target));
        }
    })?);

    let mut observers = Vec::new();
    let on_reveal = runtime.clone();
    observers.push(observe_entries(&reveal_elements, Some(config.reveal_observer), move |element, _| {
        on_reveal.dispatch(Signal::Intersection { key: element.id() });
    })?);
    if let Some(lazy) = logged("lazy images", images::lazy_load_images()) {
        observers.push(lazy);
    }

    let chart = logged("hero chart", widgets::init_hero_chart("heroChart")).flatten();

    runtime.tick();
    log::info!("landing page initialised");
    Ok(PageWiring {
        _runtime: runtime,
        _listeners: listeners,
        _observers: observers,
        chart,
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer_eq(PageState::default);
    let initialized = use_state(|| false);

    // page-wide behaviour that does not wait for the preloader
    {
        let initialized = initialized.clone();
        use_effect_with_deps(
            move |_| {
                let config = LandingConfig::default();
                logged("dark mode", actions::apply_stored_dark_mode());
                logged("global actions", actions::install_global_actions());
                logged("font preload", lifecycle::preload_fonts());
                logged("performance monitor", lifecycle::monitor_performance());
                logged("service worker", lifecycle::register_service_worker());
                logged("image fallbacks", images::install_image_fallbacks());
                let error_listener = logged("error listener", errors::listen_for_script_errors());
                let keyboard = logged("keyboard support", accessibility::install_keyboard_support());
                cookie_banner::schedule(config.cookie_banner_delay_ms);

                let init = Timeout::new(config.app_init_delay_ms, move || initialized.set(true));
                move || {
                    drop(init);
                    drop(keyboard);
                    drop(error_listener);
                }
            },
            (),
        );
    }

    {
        let dispatcher = page.dispatcher();
        use_effect_with_deps(
            move |initialized: &bool| {
                let wiring = if *initialized {
                    logged("page initialisation", wire_page(&LandingConfig::default(), dispatcher))
                } else {
                    None
                };
                move || drop(wiring)
            },
            *initialized,
        );
    }

    let landing_css = r#"
        .animate-on-scroll {
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }
        .animate-on-scroll.animate-in {
            opacity: 1;
            transform: translateY(0);
        }
        .navbar {
            transition: background-color 0.3s ease, padding 0.3s ease, transform 0.3s ease;
        }
        .navbar.scrolled {
            background-color: rgba(17, 24, 39, 0.95);
            padding-top: 0.5rem;
            padding-bottom: 0.5rem;
            box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
        }
        .back-to-top {
            position: fixed;
            bottom: 30px;
            right: 30px;
            width: 48px;
            height: 48px;
            border: none;
            border-radius: 50%;
            align-items: center;
            justify-content: center;
            background: #f1c40f;
            color: #111827;
            z-index: 1000;
        }
        #preloader {
            position: fixed;
            inset: 0;
            z-index: 10000;
            display: flex;
            align-items: center;
            justify-content: center;
            background: #111827;
        }
        .loading-bar {
            width: 200px;
            height: 4px;
            background: rgba(255, 255, 255, 0.1);
        }
        .loading-progress {
            height: 100%;
            background: #f1c40f;
            transition: width 0.1s linear;
        }
        body.keyboard-navigation *:focus {
            outline: 2px solid #f1c40f;
            outline-offset: 2px;
        }
        body.dark-mode {
            background: #0b1120;
            color: #e5e7eb;
        }
    "#;

    html! {
        <>
            <style>{ landing_css }</style>
            <PreloaderOverlay />
            <Navbar state={page.navbar} active_link={page.active_link.clone()} />
            <main>
                <Hero />
                <Services />
                <Features />
                <Process />
                <Portfolio />
                <Pricing />
                <Testimonials />
                <ContactForm />
            </main>
            <Footer />
            <BackToTop view={page.back_to_top} />
        </>
    }
}
