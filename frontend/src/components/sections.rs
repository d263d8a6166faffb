//! The static content sections. Their cards carry the classes the reveal
//! scan and click tracking look for.

use yew::prelude::*;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SERVICES: [Card; 3] = [
    Card {
        icon: "fas fa-chart-pie",
        title: "Portfolio Management",
        body: "Diversified portfolios built around your goals and reviewed every quarter.",
    },
    Card {
        icon: "fas fa-piggy-bank",
        title: "Retirement Planning",
        body: "A clear plan for the income you need and the steps to get there.",
    },
    Card {
        icon: "fas fa-balance-scale",
        title: "Tax Optimisation",
        body: "Structures that keep more of your returns working for you.",
    },
];

const FEATURES: [Card; 3] = [
    Card {
        icon: "fas fa-user-tie",
        title: "Certified Advisors",
        body: "Every advisor is independently certified and fee-only.",
    },
    Card {
        icon: "fas fa-lock",
        title: "Bank-grade Security",
        body: "Assets held with regulated custodians, never with us.",
    },
    Card {
        icon: "fas fa-headset",
        title: "Real Support",
        body: "A named advisor who picks up the phone.",
    },
];

const PROCESS: [(&str, &str); 4] = [
    ("Discovery", "We learn where you are and where you want to be."),
    ("Strategy", "A written plan with the numbers behind it."),
    ("Execution", "We put the plan in place and handle the paperwork."),
    ("Review", "Regular check-ins as markets and lives change."),
];

const PORTFOLIO: [(&str, &str); 3] = [
    ("Growth Fund", "Equity-heavy allocation for long horizons."),
    ("Balanced Fund", "Steady growth with lower volatility."),
    ("Income Fund", "Bonds and dividends for regular payouts."),
];

const PRICING: [(&str, &str, &[&str]); 3] = [
    ("Starter", "$49", &["Annual review", "Email support", "Online dashboard"]),
    ("Growth", "$149", &["Quarterly review", "Phone support", "Tax planning"]),
    ("Private", "$399", &["Monthly review", "Dedicated advisor", "Estate planning"]),
];

fn section_header(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="text-center mb-5">
            <h2 class="section-title">{ title.to_string() }</h2>
            <p class="section-subtitle">{ subtitle.to_string() }</p>
        </div>
    }
}

fn icon_cards(cards: &[Card], class: &'static str) -> Html {
    html! {
        <div class="row g-4">
            { for cards.iter().map(|card| html! {
                <div class="col-md-4">
                    <div class={class}>
                        <div class="card-icon"><i class={card.icon}></i></div>
                        <h4>{ card.title }</h4>
                        <p>{ card.body }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="py-5">
            <div class="container">
                { section_header("Our Services", "Everything you need to invest with a plan.") }
                { icon_cards(&SERVICES, "service-card") }
            </div>
        </section>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="py-5 bg-light">
            <div class="container">
                { section_header("Why Choose Us", "Advice without the conflicts of interest.") }
                { icon_cards(&FEATURES, "feature-card") }
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="py-5">
            <div class="container">
                { section_header("How It Works", "Four steps from first call to a working plan.") }
                <div class="row g-4 process-steps">
                    { for PROCESS.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="col-md-3 process-step">
                            <div class="step-number">{ i + 1 }</div>
                            <h5>{ *title }</h5>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="py-5 bg-light">
            <div class="container">
                { section_header("Our Funds", "Pick a starting point, we tailor the rest.") }
                <div class="row g-4">
                    { for PORTFOLIO.iter().map(|(title, body)| html! {
                        <div class="col-md-4">
                            <div class="portfolio-card">
                                <img class="lazy" data-src={format!("/images/{}.jpg", title.to_lowercase().replace(' ', "-"))} alt={*title} />
                                <h5>{ *title }</h5>
                                <p>{ *body }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="py-5">
            <div class="container">
                { section_header("Pricing", "Flat monthly fees. No commissions.") }
                <div class="row g-4">
                    { for PRICING.iter().map(|(plan, price, perks)| html! {
                        <div class="col-md-4">
                            <div class="pricing-card">
                                <h4>{ *plan }</h4>
                                <div class="price">{ *price }<span>{"/month"}</span></div>
                                <ul class="list-unstyled">
                                    { for perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
                                </ul>
                                <a href="#contact" class="btn btn-warning w-100">{"Choose plan"}</a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
