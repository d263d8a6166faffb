//! Work tied to the window `load` event and the document head.

use super::analytics::BrowserAnalytics;
use super::listener::DomListener;
use crate::core::analytics::AnalyticsSink;
use crate::core::timings::PageTimings;
use crate::error::FrontendError;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlLinkElement;

pub const SERVICE_WORKER_URL: &str = "/sw.js";
pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900&family=Poppins:wght@300;400;500;600;700;800;900&display=swap";

/// Runs `task` once the window has loaded, immediately if it already has.
fn after_load<F>(task: F) -> Result<(), FrontendError>
where
    F: FnOnce() + 'static,
{
    if super::document()?.ready_state() == "complete" {
        task();
        return Ok(());
    }
    let mut task = Some(task);
    DomListener::new(super::window()?.as_ref(), "load", move |_| {
        if let Some(task) = task.take() {
            task();
        }
    })?
    .forget();
    Ok(())
}

/// Reports navigation timings once `loadEventEnd` has been recorded, which
/// is only after the load handlers return.
pub fn monitor_performance() -> Result<(), FrontendError> {
    after_load(|| {
        Timeout::new(0, || {
            let Some(timing) = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.timing())
            else {
                return;
            };
            let timings = PageTimings {
                navigation_start: timing.navigation_start(),
                dom_content_loaded_end: timing.dom_content_loaded_event_end(),
                load_event_end: timing.load_event_end(),
            };
            log::info!("Page Load Time: {}ms", timings.page_load_ms());
            log::info!("DOM Ready Time: {}ms", timings.dom_ready_ms());
            let sink = BrowserAnalytics::new();
            for event in timings.events() {
                sink.track(&event);
            }
        })
        .forget();
    })
}

pub fn register_service_worker() -> Result<(), FrontendError> {
    let navigator = super::window()?.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        return Ok(());
    }
    after_load(move || {
        let promise = navigator.service_worker().register(SERVICE_WORKER_URL);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("ServiceWorker registration successful"),
                Err(_) => log::info!("ServiceWorker registration failed"),
            }
        });
    })
}

pub fn preload_fonts() -> Result<(), FrontendError> {
    let document = super::document()?;
    let link: HtmlLinkElement = document.create_element("link")?.unchecked_into();
    link.set_rel("preload");
    link.set_href(FONT_STYLESHEET);
    link.set_as("style");
    document
        .head()
        .ok_or_else(|| FrontendError::MissingElement("head".into()))?
        .append_child(&link)?;
    Ok(())
}
