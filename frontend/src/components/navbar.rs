use crate::core::navbar::NavbarState;
use yew::prelude::*;

/// `(section id, label)` for every navbar entry.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("services", "Services"),
    ("features", "Why Us"),
    ("process", "Process"),
    ("portfolio", "Portfolio"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub state: NavbarState,
    pub active_link: Option<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let class = classes!(
        "navbar",
        "navbar-expand-lg",
        "navbar-dark",
        "fixed-top",
        props.state.is_scrolled().then_some("scrolled"),
    );
    let style = format!("transform: {}; transition: transform 0.3s ease;", props.state.transform());

    html! {
        <nav id="mainNav" {class} {style}>
            <div class="container">
                <a class="navbar-brand" href="#home">{"Apex"}<span class="text-warning">{"Capital"}</span></a>
                <button
                    class="navbar-toggler"
                    type="button"
                    data-bs-toggle="collapse"
                    data-bs-target="#navbarNav"
                    aria-controls="navbarNav"
                    aria-expanded="false"
                    aria-label="Toggle navigation"
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" id="navbarNav">
                    <ul class="navbar-nav ms-auto">
                        { for NAV_ITEMS.iter().map(|(id, label)| {
                            let active = props.active_link.as_deref() == Some(*id);
                            html! {
                                <li class="nav-item">
                                    <a class={classes!("nav-link", active.then_some("active"))} href={format!("#{id}")}>
                                        { *label }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                    <a class="btn btn-warning ms-lg-3" href="#contact">{"Get Started"}</a>
                </div>
            </div>
        </nav>
    }
}
