use super::listener::DomListener;
use super::widgets;
use crate::core::accessibility::{intent_for_key, KeyboardIntent};
use crate::error::FrontendError;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const KEYBOARD_CLASS: &str = "keyboard-navigation";

fn set_keyboard_navigation(enabled: bool) {
    let Ok(body) = super::body() else {
        return;
    };
    let result = if enabled {
        body.class_list().add_1(KEYBOARD_CLASS)
    } else {
        body.class_list().remove_1(KEYBOARD_CLASS)
    };
    if let Err(e) = result {
        log::warn!("could not toggle {KEYBOARD_CLASS}: {:?}", e);
    }
}

/// Focus outlines while tabbing, Escape to close the open modal.
pub fn install_keyboard_support() -> Result<[DomListener; 2], FrontendError> {
    let document = super::document()?;
    let keydown = DomListener::new(&document, "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match intent_for_key(&event.key()) {
            Some(KeyboardIntent::EnableKeyboardNavigation) => set_keyboard_navigation(true),
            Some(KeyboardIntent::CloseOpenModal) => {
                if let Err(e) = widgets::hide_open_modal() {
                    log::debug!("escape: {e}");
                }
            }
            None => {}
        }
    })?;
    let mousedown = DomListener::new(&document, "mousedown", |_| set_keyboard_navigation(false))?;
    Ok([keydown, mousedown])
}
