#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreloaderPhase {
    Loading,
    /// Progress hit 100; waiting before the fade starts.
    Complete,
    FadingOut,
    Hidden,
}

/// Simulated loading bar. Increments come from the host so the model stays
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Preloader {
    progress: f64,
    phase: PreloaderPhase,
}

impl Default for Preloader {
    fn default() -> Self {
        Self {
            progress: 0.0,
            phase: PreloaderPhase::Loading,
        }
    }
}

impl Preloader {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase != PreloaderPhase::Hidden
    }

    pub fn bar_width(&self) -> String {
        format!("{}%", self.progress)
    }

    pub fn advance(&mut self, increment: f64) {
        if self.phase != PreloaderPhase::Loading {
            return;
        }
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        if self.progress >= 100.0 {
            self.phase = PreloaderPhase::Complete;
        }
    }

    pub fn fade(&mut self) {
        if self.phase == PreloaderPhase::Complete {
            self.phase = PreloaderPhase::FadingOut;
        }
    }

    pub fn hide(&mut self) {
        if self.phase == PreloaderPhase::FadingOut {
            self.phase = PreloaderPhase::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_every_phase() {
        let mut preloader = Preloader::default();
        preloader.advance(14.0);
        assert_eq!(preloader.bar_width(), "14%");
        preloader.fade();
        assert_eq!(preloader.phase(), PreloaderPhase::Loading);

        for _ in 0..10 {
            preloader.advance(12.5);
        }
        assert_eq!(preloader.progress(), 100.0);
        assert_eq!(preloader.phase(), PreloaderPhase::Complete);

        preloader.hide();
        assert_eq!(preloader.phase(), PreloaderPhase::Complete);
        preloader.fade();
        preloader.hide();
        assert!(!preloader.is_loading());
    }

    #[test]
    fn progress_is_frozen_once_complete() {
        let mut preloader = Preloader::default();
        preloader.advance(150.0);
        preloader.advance(10.0);
        assert_eq!(preloader.progress(), 100.0);
    }
}
