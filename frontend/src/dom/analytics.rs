use crate::core::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::utils::api::Api;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

/// Sends events to Google Analytics when `gtag` is on the page and mirrors
/// every event to the backend's `/api/events` endpoint.
#[derive(Debug, Clone)]
pub struct BrowserAnalytics {
    beacon: bool,
}

impl BrowserAnalytics {
    pub fn new() -> Self {
        Self { beacon: true }
    }

    /// A sink that only logs and forwards to `gtag`.
    pub fn local_only() -> Self {
        Self { beacon: false }
    }

    fn send_gtag(event: &AnalyticsEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            return;
        };
        let params = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&params, &"event_category".into(), &event.category.as_str().into());
        let _ = js_sys::Reflect::set(&params, &"event_label".into(), &event.label.as_str().into());
        if let Err(err) = gtag.call3(
            &JsValue::NULL,
            &"event".into(),
            &event.action.as_str().into(),
            &params,
        ) {
            log::warn!("gtag rejected event: {:?}", err);
        }
    }
}

impl AnalyticsSink for BrowserAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        Self::send_gtag(event);
        log::info!("Event tracked: {event}");
        if !self.beacon {
            return;
        }
        let event = event.clone();
        spawn_local(async move {
            let request = match Api::post("/api/events").json(&event) {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("could not encode event: {err}");
                    return;
                }
            };
            if let Err(err) = request.send().await {
                log::debug!("event beacon failed: {err}");
            }
        });
    }
}
