use crate::config::ObserverOptions;
use crate::error::FrontendError;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` and its callback; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ObserverHandle {
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` for each element as it intersects. The callback also
/// receives the observer so one-shot users can `unobserve`.
pub fn observe_entries<F>(
    elements: &[Element],
    options: Option<ObserverOptions>,
    mut on_enter: F,
) -> Result<ObserverHandle, FrontendError>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let callback = EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_enter(entry.target(), &observer);
            }
        }
    });

    let observer = match options {
        Some(options) => {
            let init = IntersectionObserverInit::new();
            js_sys::Reflect::set(&init, &"threshold".into(), &JsValue::from_f64(options.threshold))?;
            js_sys::Reflect::set(&init, &"rootMargin".into(), &JsValue::from_str(options.root_margin))?;
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };

    for element in elements {
        observer.observe(element);
    }
    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}
