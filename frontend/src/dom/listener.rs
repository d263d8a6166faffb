use crate::error::FrontendError;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener that removes itself when dropped.
pub struct DomListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl DomListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Result<Self, FrontendError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback: Some(callback),
        })
    }

    /// Keeps the listener for the lifetime of the page.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(self.event_type, callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {:?}", self.event_type, e);
            }
        }
    }
}
