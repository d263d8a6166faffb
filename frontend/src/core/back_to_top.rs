use crate::config::LandingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityToggle {
    Hidden,
    FadingOut,
    Visible,
}

/// What the button surface should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTopView {
    pub displayed: bool,
    pub opacity: f64,
}

impl From<VisibilityToggle> for BackToTopView {
    fn from(state: VisibilityToggle) -> Self {
        match state {
            VisibilityToggle::Hidden => Self {
                displayed: false,
                opacity: 0.0,
            },
            VisibilityToggle::FadingOut => Self {
                displayed: true,
                opacity: 0.0,
            },
            VisibilityToggle::Visible => Self {
                displayed: true,
                opacity: 1.0,
            },
        }
    }
}

/// Timer the host must arm; `generation` identifies it on expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceTimer {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Hidden / FadingOut / Visible toggle with a cancellable grace window
/// before the button leaves layout.
#[derive(Debug, Clone)]
pub struct BackToTopController {
    state: VisibilityToggle,
    threshold: f64,
    grace_ms: u32,
    generation: u64,
}

impl BackToTopController {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            state: VisibilityToggle::Hidden,
            threshold: config.back_to_top_threshold,
            grace_ms: config.back_to_top_grace_ms,
            generation: 0,
        }
    }

    pub fn state(&self) -> VisibilityToggle {
        self.state
    }

    pub fn view(&self) -> BackToTopView {
        self.state.into()
    }

    /// Applies one tick. Returns the grace timer to arm when the button
    /// starts fading out.
    pub fn on_offset(&mut self, offset: f64) -> Option<GraceTimer> {
        if offset > self.threshold {
            if self.state != VisibilityToggle::Visible {
                // invalidates any pending hide
                self.generation += 1;
                self.state = VisibilityToggle::Visible;
            }
            return None;
        }

        if self.state == VisibilityToggle::Visible {
            self.generation += 1;
            self.state = VisibilityToggle::FadingOut;
            return Some(GraceTimer {
                generation: self.generation,
                delay_ms: self.grace_ms,
            });
        }
        None
    }

    /// Called when a grace timer fires. Stale timers are ignored; a live one
    /// commits the hide only if the offset is still under the threshold.
    pub fn on_grace_elapsed(&mut self, generation: u64, offset: f64) {
        if generation != self.generation || self.state != VisibilityToggle::FadingOut {
            return;
        }
        self.state = if offset > self.threshold {
            VisibilityToggle::Visible
        } else {
            VisibilityToggle::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> BackToTopController {
        BackToTopController::new(&LandingConfig::default())
    }

    #[test]
    fn appears_past_threshold() {
        let mut button = controller();
        assert_eq!(button.on_offset(500.0), None);
        assert_eq!(button.state(), VisibilityToggle::Hidden);
        assert_eq!(button.on_offset(501.0), None);
        assert_eq!(
            button.view(),
            BackToTopView {
                displayed: true,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn hides_after_grace_window() {
        let mut button = controller();
        button.on_offset(600.0);
        let timer = button.on_offset(400.0).expect("grace timer");
        assert_eq!(timer.delay_ms, 300);
        assert_eq!(button.state(), VisibilityToggle::FadingOut);
        assert_eq!(button.view().opacity, 0.0);
        assert!(button.view().displayed);

        button.on_grace_elapsed(timer.generation, 400.0);
        assert_eq!(button.state(), VisibilityToggle::Hidden);
        assert!(!button.view().displayed);
    }

    #[test]
    fn scrolling_back_down_cancels_pending_hide() {
        let mut button = controller();
        button.on_offset(600.0);
        let timer = button.on_offset(400.0).expect("grace timer");
        button.on_offset(600.0);
        button.on_grace_elapsed(timer.generation, 600.0);
        assert_eq!(button.state(), VisibilityToggle::Visible);
    }

    #[test]
    fn offset_recovered_without_tick_keeps_button() {
        let mut button = controller();
        button.on_offset(600.0);
        let timer = button.on_offset(400.0).expect("grace timer");
        button.on_grace_elapsed(timer.generation, 700.0);
        assert_eq!(button.state(), VisibilityToggle::Visible);
    }

    #[test]
    fn repeated_low_ticks_arm_a_single_timer() {
        let mut button = controller();
        button.on_offset(900.0);
        assert!(button.on_offset(300.0).is_some());
        assert!(button.on_offset(200.0).is_none());
        assert!(button.on_offset(100.0).is_none());
    }

    #[test]
    fn stale_timer_from_earlier_fade_is_ignored() {
        let mut button = controller();
        button.on_offset(600.0);
        let stale = button.on_offset(400.0).expect("first timer");
        button.on_offset(600.0);
        let fresh = button.on_offset(450.0).expect("second timer");
        button.on_grace_elapsed(stale.generation, 450.0);
        assert_eq!(button.state(), VisibilityToggle::FadingOut);
        button.on_grace_elapsed(fresh.generation, 450.0);
        assert_eq!(button.state(), VisibilityToggle::Hidden);
    }
}
