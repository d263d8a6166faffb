use super::analytics::BrowserAnalytics;
use super::listener::DomListener;
use crate::core::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::error::FrontendError;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

/// Routes Rust panics to the console and to analytics.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = info.to_string();
        log::error!("panic: {message}");
        BrowserAnalytics::local_only().track(&AnalyticsEvent::script_error(&message));
    }));
}

/// Reports uncaught script errors from anywhere on the page.
pub fn listen_for_script_errors() -> Result<DomListener, FrontendError> {
    let window = super::window()?;
    DomListener::new(&window, "error", |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_else(|| "unknown error".to_string());
        log::error!("JavaScript Error: {message}");
        BrowserAnalytics::new().track(&AnalyticsEvent::script_error(&message));
    })
}
