use crate::config::LandingConfig;
use crate::core::swipe::{SwipeDirection, SwipeTracker};
use crate::dom::widgets::{self, Carousel};
use yew::prelude::*;

const CAROUSEL_INTERVAL_MS: u32 = 6000;

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "They turned a pile of old pensions into one plan I actually understand.",
        "Maria K.",
        "Retired teacher",
    ),
    (
        "Straight answers, no sales pitch. Our portfolio has never been calmer.",
        "James & Priya L.",
        "Small business owners",
    ),
    (
        "The quarterly reviews alone are worth the fee.",
        "Tom R.",
        "Software engineer",
    ),
];

fn touch_x(event: &TouchEvent) -> Option<f64> {
    event.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let carousel = use_mut_ref(|| None::<Carousel>);
    let swipe = use_mut_ref(SwipeTracker::default);

    {
        let node = node.clone();
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = node.cast::<web_sys::Element>() {
                    match widgets::carousel(&element, CAROUSEL_INTERVAL_MS) {
                        Ok(instance) => *carousel.borrow_mut() = Some(instance),
                        Err(e) => log::warn!("testimonial carousel disabled: {e}"),
                    }
                }
                move || {
                    if let Some(instance) = carousel.borrow_mut().take() {
                        instance.dispose();
                    }
                }
            },
            (),
        );
    }

    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                swipe.borrow_mut().start(x);
            }
        })
    };

    let ontouchend = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(x) = touch_x(&e) else {
                return;
            };
            let threshold = LandingConfig::default().swipe_threshold;
            let direction = swipe.borrow().finish(x, threshold);
            if let (Some(direction), Some(instance)) = (direction, carousel.borrow().as_ref()) {
                match direction {
                    SwipeDirection::Next => instance.next(),
                    SwipeDirection::Previous => instance.prev(),
                }
            }
        })
    };

    html! {
        <section id="testimonials" class="py-5 bg-dark text-white">
            <div class="container">
                <div class="text-center mb-5">
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                </div>
                <div
                    ref={node}
                    id="testimonialCarousel"
                    class="carousel slide"
                    {ontouchstart}
                    {ontouchend}
                >
                    <div class="carousel-inner">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, name, role))| html! {
                            <div class={classes!("carousel-item", (i == 0).then_some("active"))}>
                                <blockquote class="testimonial text-center">
                                    <p class="lead">{ *quote }</p>
                                    <footer>
                                        <strong>{ *name }</strong>
                                        <span class="d-block text-muted">{ *role }</span>
                                    </footer>
                                </blockquote>
                            </div>
                        }) }
                    </div>
                    <button class="carousel-control-prev" type="button" data-bs-target="#testimonialCarousel" data-bs-slide="prev">
                        <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                    </button>
                    <button class="carousel-control-next" type="button" data-bs-target="#testimonialCarousel" data-bs-slide="next">
                        <span class="carousel-control-next-icon" aria-hidden="true"></span>
                    </button>
                </div>
            </div>
        </section>
    }
}
