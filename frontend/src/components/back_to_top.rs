use crate::core::back_to_top::BackToTopView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub view: BackToTopView,
}

/// Clicks are picked up by the document-level click listener.
#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let style = format!(
        "display: {}; opacity: {}; transition: opacity 0.3s ease;",
        if props.view.displayed { "flex" } else { "none" },
        props.view.opacity,
    );
    html! {
        <button id="backToTop" class="back-to-top" type="button" aria-label="Back to top" {style}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
