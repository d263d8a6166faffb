//! Functions the static markup calls by name (`onclick="printPage()"` and
//! friends), installed as properties of `window`.

use super::analytics::BrowserAnalytics;
use super::cookie_banner;
use super::notification::{self, show_notification};
use super::storage;
use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, ShareMethod};
use crate::core::preferences::ConsentDecision;
use crate::error::FrontendError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

const DARK_MODE_CLASS: &str = "dark-mode";

fn install(name: &str, function: JsValue) -> Result<(), FrontendError> {
    js_sys::Reflect::set(super::window()?.as_ref(), &JsValue::from_str(name), &function)?;
    Ok(())
}

pub fn install_global_actions() -> Result<(), FrontendError> {
    install(
        "toggleDarkMode",
        Closure::<dyn Fn()>::new(|| {
            if let Err(e) = toggle_dark_mode() {
                log::warn!("toggleDarkMode failed: {e}");
            }
        })
        .into_js_value(),
    )?;
    install("printPage", Closure::<dyn Fn()>::new(print_page).into_js_value())?;
    install(
        "shareContent",
        Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(|title: JsValue, text: JsValue, url: JsValue| {
            let title = title.as_string().unwrap_or_default();
            let text = text.as_string().unwrap_or_default();
            let url = url.as_string().unwrap_or_default();
            spawn_local(async move {
                if let Err(e) = share_content(&title, &text, &url).await {
                    log::warn!("Error sharing: {e}");
                }
            });
        })
        .into_js_value(),
    )?;
    install(
        "acceptCookies",
        Closure::<dyn Fn()>::new(|| cookie_banner::decide(ConsentDecision::Accepted)).into_js_value(),
    )?;
    install(
        "declineCookies",
        Closure::<dyn Fn()>::new(|| cookie_banner::decide(ConsentDecision::Declined)).into_js_value(),
    )?;
    install(
        "showNotification",
        Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(|message: JsValue, kind: JsValue, duration: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let kind = kind.as_string().unwrap_or_else(|| notification::DEFAULT_KIND.to_string());
            let duration = duration
                .as_f64()
                .filter(|ms| ms.is_finite() && *ms >= 0.0)
                .map_or(notification::DEFAULT_DURATION_MS, |ms| ms as u32);
            if let Err(e) = show_notification(&message, &kind, duration) {
                log::warn!("showNotification failed: {e}");
            }
        })
        .into_js_value(),
    )?;
    Ok(())
}

/// Restores the stored dark-mode preference onto `<body>`.
pub fn apply_stored_dark_mode() -> Result<(), FrontendError> {
    if storage::preferences().dark_mode() {
        super::body()?.class_list().add_1(DARK_MODE_CLASS)?;
    }
    Ok(())
}

pub fn toggle_dark_mode() -> Result<bool, FrontendError> {
    let enabled = super::body()?.class_list().toggle(DARK_MODE_CLASS)?;
    storage::preferences().set_dark_mode(enabled);
    Ok(enabled)
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::warn!("print failed: {:?}", e);
        }
    }
    BrowserAnalytics::new().track(&AnalyticsEvent::print());
}

/// Native share sheet when the browser has one, otherwise copies `url` to
/// the clipboard and says so.
pub async fn share_content(title: &str, text: &str, url: &str) -> Result<(), FrontendError> {
    let navigator = super::window()?.navigator();
    let share = js_sys::Reflect::get(&navigator, &"share".into())?;

    if let Some(share) = share.dyn_ref::<js_sys::Function>() {
        let data = js_sys::Object::new();
        js_sys::Reflect::set(&data, &"title".into(), &title.into())?;
        js_sys::Reflect::set(&data, &"text".into(), &text.into())?;
        js_sys::Reflect::set(&data, &"url".into(), &url.into())?;
        let promise: js_sys::Promise = share.call1(&navigator, &data)?.dyn_into()?;
        let shared = JsFuture::from(promise).await;
        if let Some(event) = ShareMethod::Native.completed(&shared) {
            BrowserAnalytics::new().track(&event);
        }
        shared?;
        return Ok(());
    }

    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())?;
    let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: js_sys::Promise = write_text.call1(&clipboard, &url.into())?.dyn_into()?;
    let copied = JsFuture::from(promise).await;
    if let Some(event) = ShareMethod::Clipboard.completed(&copied) {
        notification::notify("Link copied to clipboard!", notification::DEFAULT_KIND);
        BrowserAnalytics::new().track(&event);
    }
    copied?;
    Ok(())
}
