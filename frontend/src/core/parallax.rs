use crate::config::LandingConfig;
use crate::core::viewport::ViewportProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxKind {
    /// Background particles, always shifted.
    HeroParticles,
    /// Cards, shifted only while on screen.
    FloatingCard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallaxLayer {
    pub key: String,
    pub kind: ParallaxKind,
}

#[derive(Debug, Clone)]
pub struct ParallaxEffect {
    layers: Vec<ParallaxLayer>,
    particles_rate: f64,
    card_rate: f64,
}

impl ParallaxEffect {
    pub fn new(layers: Vec<ParallaxLayer>, config: &LandingConfig) -> Self {
        Self {
            layers,
            particles_rate: config.particles_rate,
            card_rate: config.floating_card_rate,
        }
    }

    /// Vertical translation per layer for this tick. Off-screen cards keep
    /// their previous transform and are left out.
    pub fn offsets(&self, offset: f64, viewport: &dyn ViewportProbe) -> Vec<(String, f64)> {
        let height = viewport.viewport_height();
        self.layers
            .iter()
            .filter_map(|layer| match layer.kind {
                ParallaxKind::HeroParticles => Some((layer.key.clone(), offset * self.particles_rate)),
                ParallaxKind::FloatingCard => viewport
                    .bounds_of(&layer.key)
                    .filter(|rect| rect.overlaps_viewport(height))
                    .map(|_| (layer.key.clone(), offset * self.card_rate)),
            })
            .collect()
    }
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::fake::FakeViewport;

    fn effect() -> ParallaxEffect {
        ParallaxEffect::new(
            vec![
                ParallaxLayer {
                    key: "particles".into(),
                    kind: ParallaxKind::HeroParticles,
                },
                ParallaxLayer {
                    key: "card-a".into(),
                    kind: ParallaxKind::FloatingCard,
                },
                ParallaxLayer {
                    key: "card-b".into(),
                    kind: ParallaxKind::FloatingCard,
                },
            ],
            &LandingConfig::default(),
        )
    }

    #[test]
    fn particles_move_against_scroll_and_visible_cards_follow() {
        let viewport = FakeViewport::at(200.0)
            .with_rect("card-a", 100.0, 300.0)
            .with_rect("card-b", 900.0, 1100.0);
        let offsets = effect().offsets(200.0, &viewport);
        assert_eq!(
            offsets,
            vec![("particles".to_string(), -100.0), ("card-a".to_string(), 20.0)]
        );
    }

    #[test]
    fn translate_formats_css() {
        assert_eq!(translate_y(-12.5), "translateY(-12.5px)");
        assert_eq!(translate_y(0.0), "translateY(0px)");
    }
}
