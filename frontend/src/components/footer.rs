use crate::dom::actions;
use yew::prelude::*;

const SHARE_TITLE: &str = "Apex Capital";
const SHARE_TEXT: &str = "Independent investment advice with transparent pricing.";

#[function_component(Footer)]
pub fn footer() -> Html {
    let on_print = Callback::from(|_: MouseEvent| actions::print_page());
    let on_share = Callback::from(|_: MouseEvent| {
        let url = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = actions::share_content(SHARE_TITLE, SHARE_TEXT, &url).await {
                log::warn!("Error sharing: {e}");
            }
        });
    });
    let on_dark_mode = Callback::from(|_: MouseEvent| {
        if let Err(e) = actions::toggle_dark_mode() {
            log::warn!("dark mode toggle failed: {e}");
        }
    });

    html! {
        <footer class="footer bg-dark text-white py-4">
            <div class="container d-flex flex-wrap justify-content-between align-items-center">
                <p class="mb-0">{"© 2024 Apex Capital. All rights reserved."}</p>
                <div class="footer-actions">
                    <button type="button" class="btn btn-sm btn-outline-light me-2" onclick={on_print}>
                        <i class="fas fa-print"></i>{" Print"}
                    </button>
                    <button type="button" class="btn btn-sm btn-outline-light me-2" onclick={on_share}>
                        <i class="fas fa-share-alt"></i>{" Share"}
                    </button>
                    <button type="button" class="btn btn-sm btn-outline-light" onclick={on_dark_mode}>
                        <i class="fas fa-moon"></i>{" Dark mode"}
                    </button>
                </div>
            </div>
        </footer>
    }
}
