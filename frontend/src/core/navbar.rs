use crate::config::LandingConfig;
use crate::core::scroll::{ScrollHistory, ScrollSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarAppearance {
    Expanded,
    Scrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVisibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    pub appearance: NavbarAppearance,
    pub visibility: NavbarVisibility,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            appearance: NavbarAppearance::Expanded,
            visibility: NavbarVisibility::Visible,
        }
    }
}

impl NavbarState {
    pub fn is_scrolled(&self) -> bool {
        self.appearance == NavbarAppearance::Scrolled
    }

    pub fn transform(&self) -> &'static str {
        match self.visibility {
            NavbarVisibility::Visible => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

/// Derives the navbar's two presentation flags from scroll offset and
/// direction, once per tick.
#[derive(Debug, Clone)]
pub struct NavbarStateMachine {
    state: NavbarState,
    history: ScrollHistory,
    scrolled_after: f64,
    hide_after: f64,
}

impl NavbarStateMachine {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            state: NavbarState::default(),
            history: ScrollHistory::default(),
            scrolled_after: config.navbar_scrolled_offset,
            hide_after: config.navbar_hide_offset,
        }
    }

    pub fn state(&self) -> NavbarState {
        self.state
    }

    pub fn on_tick(&mut self, offset: f64) -> NavbarState {
        let signal = self.history.advance(offset);
        self.state = self.next_state(&signal);
        self.state
    }

    fn next_state(&self, signal: &ScrollSignal) -> NavbarState {
        let appearance = if signal.offset > self.scrolled_after {
            NavbarAppearance::Scrolled
        } else {
            NavbarAppearance::Expanded
        };
        let visibility = if signal.is_scrolling_down() && signal.offset > self.hide_after {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Visible
        };
        NavbarState {
            appearance,
            visibility,
        }
    }
}
