//! DOM-free page logic. Everything here runs natively under `cargo test`.

pub mod accessibility;
pub mod active_section;
pub mod analytics;
pub mod back_to_top;
pub mod chart;
pub mod coordinator;
pub mod counter;
pub mod dispatcher;
pub mod listeners;
pub mod navbar;
pub mod parallax;
pub mod preferences;
pub mod preloader;
pub mod rate_limit;
pub mod reveal;
pub mod scroll;
pub mod swipe;
pub mod timings;
pub mod validation;
pub mod viewport;
