use landing_frontend::dom::errors::install_panic_hook;
use landing_frontend::pages::landing::Landing;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    install_panic_hook();

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));
    match root {
        Some(root) => {
            yew::Renderer::<Landing>::with_root(root).render();
        }
        None => {
            log::warn!("#app not found, mounting on body");
            yew::Renderer::<Landing>::new().render();
        }
    }
}
