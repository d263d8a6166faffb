//! Bindings for the third-party widgets loaded by `index.html`: Chart.js
//! and Bootstrap's modal, carousel and collapse. Every entry point checks
//! the library is present first, since a missing script must not take the
//! page down.

use crate::core::chart::{hero_chart_config, GRADIENT_HEIGHT, GRADIENT_STOPS};
use crate::error::FrontendError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    fn get_instance(element: &Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Carousel;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<Carousel, JsValue>;

    #[wasm_bindgen(method)]
    pub fn next(this: &Carousel);

    #[wasm_bindgen(method)]
    pub fn prev(this: &Carousel);

    #[wasm_bindgen(method)]
    pub fn dispose(this: &Carousel);

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Collapse;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(method)]
    fn hide(this: &Collapse);
}

fn library_loaded(name: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

fn require(name: &'static str) -> Result<(), FrontendError> {
    if library_loaded(name) {
        Ok(())
    } else {
        Err(FrontendError::MissingLibrary(name))
    }
}

/// Builds the hero line chart on `canvas_id`. Returns `Ok(None)` when the
/// page has no such canvas.
pub fn init_hero_chart(canvas_id: &str) -> Result<Option<Chart>, FrontendError> {
    let Some(canvas) = super::document()?.get_element_by_id(canvas_id) else {
        return Ok(None);
    };
    require("Chart")?;
    let canvas: HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| FrontendError::MissingElement(format!("canvas#{canvas_id}")))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| FrontendError::Js("2d context unavailable".into()))?
        .unchecked_into();

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, GRADIENT_HEIGHT);
    for (offset, color) in GRADIENT_STOPS {
        gradient.add_color_stop(offset, color)?;
    }

    let config = js_sys::JSON::parse(&hero_chart_config().to_string())?;
    let dataset = js_sys::Reflect::get(&config, &"data".into())
        .and_then(|data| js_sys::Reflect::get(&data, &"datasets".into()))
        .and_then(|sets| js_sys::Reflect::get_u32(&sets, 0))?;
    js_sys::Reflect::set(&dataset, &"backgroundColor".into(), &gradient)?;

    Ok(Some(Chart::new(&ctx, &config)?))
}

pub fn show_modal(element_id: &str) -> Result<(), FrontendError> {
    require("bootstrap")?;
    let element = super::element_by_id(element_id)?;
    let modal = match Modal::get_instance(&element) {
        Some(modal) => modal,
        None => Modal::new(&element)?,
    };
    modal.show();
    Ok(())
}

/// Hides whichever Bootstrap modal is currently open, if any.
pub fn hide_open_modal() -> Result<(), FrontendError> {
    require("bootstrap")?;
    if let Some(open) = super::document()?.query_selector(".modal.show")? {
        if let Some(modal) = Modal::get_instance(&open) {
            modal.hide();
        }
    }
    Ok(())
}

/// Closes the mobile navbar menu when it is expanded.
pub fn collapse_navbar() -> Result<(), FrontendError> {
    let Some(menu) = super::document()?.query_selector(".navbar-collapse")? else {
        return Ok(());
    };
    if !menu.class_list().contains("show") {
        return Ok(());
    }
    require("bootstrap")?;
    Collapse::new(&menu)?.hide();
    Ok(())
}

pub fn carousel(element: &Element, interval_ms: u32) -> Result<Carousel, FrontendError> {
    require("bootstrap")?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"interval".into(), &JsValue::from(interval_ms))?;
    js_sys::Reflect::set(&options, &"wrap".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"pause".into(), &JsValue::from_str("hover"))?;
    js_sys::Reflect::set(&options, &"touch".into(), &JsValue::TRUE)?;
    Ok(Carousel::new(element, &options)?)
}
