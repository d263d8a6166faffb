use super::listener::DomListener;
use super::observer::{observe_entries, ObserverHandle};
use crate::error::FrontendError;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgZmlsbD0iI2VlZSIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LWZhbWlseT0iQXJpYWwsIHNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTQiIGZpbGw9IiNhYWEiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5JbWFnZSBub3QgYXZhaWxhYmxlPC90ZXh0Pjwvc3ZnPg==";
pub const FALLBACK_ALT: &str = "Image not available";

/// Swaps `data-src` into `src` the first time each image scrolls into view.
pub fn lazy_load_images() -> Result<ObserverHandle, FrontendError> {
    let images = super::query_all("img[data-src]")?;
    log::debug!("lazy loading {} images", images.len());
    observe_entries(&images, None, |element, observer| {
        if let Some(src) = element.get_attribute("data-src") {
            if let Some(img) = element.dyn_ref::<HtmlImageElement>() {
                img.set_src(&src);
            }
        }
        let _ = element.class_list().remove_1("lazy");
        observer.unobserve(&element);
    })
}

/// Replaces broken images with an inline placeholder.
pub fn install_image_fallbacks() -> Result<(), FrontendError> {
    for element in super::query_all("img")? {
        let Ok(img) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let target = img.clone();
        DomListener::new(&img, "error", move |_| {
            // never retry the placeholder
            if target.src() != FALLBACK_IMAGE {
                target.set_src(FALLBACK_IMAGE);
                target.set_alt(FALLBACK_ALT);
            }
        })?
        .forget();
    }
    Ok(())
}
