/// Base URL of the backend API. Empty means same origin, which is how the
/// bundle is served in production.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL").unwrap_or("").trim_end_matches('/').to_string()
}

/// Options for one `IntersectionObserver`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Every pixel threshold and delay the page behaviour depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub navbar_scrolled_offset: f64,
    pub navbar_hide_offset: f64,
    pub anchor_line: f64,
    pub back_to_top_threshold: f64,
    pub back_to_top_grace_ms: u32,
    pub navbar_throttle_ms: f64,
    pub back_to_top_throttle_ms: f64,
    pub parallax_throttle_ms: f64,
    pub reveal_stagger_ms: u32,
    pub anchor_scroll_margin: f64,
    pub particles_rate: f64,
    pub floating_card_rate: f64,
    pub swipe_threshold: f64,
    pub app_init_delay_ms: u32,
    pub cookie_banner_delay_ms: u32,
    pub preloader_tick_ms: u32,
    pub preloader_step_ms: u32,
    pub preloader_max_increment: f64,
    pub reveal_observer: ObserverOptions,
    pub counter_observer: ObserverOptions,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_offset: 50.0,
            navbar_hide_offset: 100.0,
            anchor_line: 150.0,
            back_to_top_threshold: 500.0,
            back_to_top_grace_ms: 300,
            navbar_throttle_ms: 10.0,
            back_to_top_throttle_ms: 100.0,
            parallax_throttle_ms: 10.0,
            reveal_stagger_ms: 100,
            anchor_scroll_margin: 100.0,
            particles_rate: -0.5,
            floating_card_rate: 0.1,
            swipe_threshold: 50.0,
            app_init_delay_ms: 2000,
            cookie_banner_delay_ms: 3000,
            preloader_tick_ms: 100,
            preloader_step_ms: 500,
            preloader_max_increment: 15.0,
            reveal_observer: ObserverOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
            },
            counter_observer: ObserverOptions {
                threshold: 0.5,
                root_margin: "0px 0px -100px 0px",
            },
        }
    }
}
