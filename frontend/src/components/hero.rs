use super::stats::StatsBand;
use yew::prelude::*;

const FLOATING_CARDS: [(&str, &str, &str); 3] = [
    ("fas fa-chart-line", "+24.5%", "Portfolio growth"),
    ("fas fa-shield-alt", "100%", "Secure assets"),
    ("fas fa-users", "2,500+", "Happy clients"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero-section">
            <div id="hero-particles" class="hero-particles"></div>
            <div class="container">
                <div class="row align-items-center min-vh-100">
                    <div class="col-lg-6">
                        <h1 class="hero-title">
                            {"Grow your wealth with "}
                            <span class="text-warning">{"confidence"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Independent investment advice, transparent pricing and a team that answers the phone."}
                        </p>
                        <div class="hero-buttons">
                            <a href="#contact" class="btn btn-warning btn-lg me-3">{"Book a consultation"}</a>
                            <a href="#services" class="btn btn-outline-light btn-lg">{"Our services"}</a>
                        </div>
                        <StatsBand />
                    </div>
                    <div class="col-lg-6">
                        <div class="hero-visual">
                            <div class="chart-container">
                                <canvas id="heroChart"></canvas>
                            </div>
                            { for FLOATING_CARDS.iter().enumerate().map(|(i, (icon, value, label))| html! {
                                <div id={format!("floating-card-{}", i + 1)} class={classes!("floating-card", format!("card-{}", i + 1))}>
                                    <i class={*icon}></i>
                                    <div>
                                        <strong>{ *value }</strong>
                                        <span>{ *label }</span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
