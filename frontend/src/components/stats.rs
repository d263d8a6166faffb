use crate::config::LandingConfig;
use crate::core::counter::{format_count, parse_count, CounterAnimation, CounterFrame, COUNTER_FRAME_MS};
use crate::dom::{now_ms, observer::observe_entries};
use gloo_timers::callback::Interval;
use yew::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("2500", "Clients served"),
    ("150", "Million managed"),
    ("98", "Retention rate"),
];

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw `data-count` value.
    pub count: &'static str,
    pub label: &'static str,
}

/// Counts up to `data-count` the first time it scrolls into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let animation = use_state(|| None::<CounterAnimation>);
    let frame = use_state(|| CounterFrame { value: 0, done: false });

    {
        let node = node.clone();
        let animation = animation.clone();
        use_effect_with_deps(
            move |_| {
                let options = LandingConfig::default().counter_observer;
                let handle = node.cast::<web_sys::Element>().and_then(|element| {
                    let result = observe_entries(&[element], Some(options), move |element, observer| {
                        observer.unobserve(&element);
                        let raw = element.get_attribute("data-count").unwrap_or_default();
                        match parse_count(&raw) {
                            Some(target) => animation.set(Some(CounterAnimation::new(target, now_ms()))),
                            None => log::warn!("skipping counter with data-count {:?}", raw),
                        }
                    });
                    result.map_err(|e| log::warn!("counter observer: {e}")).ok()
                });
                move || drop(handle)
            },
            (),
        );
    }

    {
        let frame_handle = frame.clone();
        use_effect_with_deps(
            move |(animation, done): &(Option<CounterAnimation>, bool)| {
                let interval = match (*animation, *done) {
                    (Some(animation), false) => Some(Interval::new(COUNTER_FRAME_MS as u32, move || {
                        frame_handle.set(animation.sample(now_ms()));
                    })),
                    _ => None,
                };
                move || drop(interval)
            },
            (*animation, frame.done),
        );
    }

    html! {
        <div class="stat-item">
            <span ref={node} class="stat-number" data-count={props.count}>
                { format_count(frame.value) }
            </span>
            <span class="stat-label">{ props.label }</span>
        </div>
    }
}

#[function_component(StatsBand)]
pub fn stats_band() -> Html {
    html! {
        <div class="hero-stats">
            { for STATS.iter().map(|(count, label)| html! {
                <StatCounter count={*count} label={*label} />
            }) }
        </div>
    }
}
