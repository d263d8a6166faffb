use crate::error::FrontendError;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const DEFAULT_KIND: &str = "success";
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Pops a dismissible Bootstrap alert in the top-right corner and removes it
/// after `duration_ms`.
pub fn show_notification(message: &str, kind: &str, duration_ms: u32) -> Result<(), FrontendError> {
    let document = super::document()?;
    let alert: HtmlElement = document.create_element("div")?.unchecked_into();
    alert.set_class_name(&format!("alert alert-{kind} alert-dismissible fade show position-fixed"));
    let style = alert.style();
    style.set_property("top", "100px")?;
    style.set_property("right", "20px")?;
    style.set_property("z-index", "9999")?;
    style.set_property("min-width", "300px")?;

    // text node, never markup
    alert.append_with_str_1(message)?;
    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("data-bs-dismiss", "alert")?;
    alert.append_child(&close)?;

    super::body()?.append_child(&alert)?;

    Timeout::new(duration_ms, move || {
        if alert.parent_node().is_some() {
            alert.remove();
        }
    })
    .forget();
    Ok(())
}

/// Logging wrapper for call sites that cannot do anything with an error.
pub fn notify(message: &str, kind: &str) {
    if let Err(e) = show_notification(message, kind, DEFAULT_DURATION_MS) {
        log::warn!("could not show notification: {e}");
    }
}
