//! One-time scan of the rendered document into the [`PageLayout`] the
//! coordinator works from, plus click classification.

use crate::core::active_section::NavSection;
use crate::core::analytics::ClickTarget;
use crate::core::coordinator::PageLayout;
use crate::core::parallax::{ParallaxKind, ParallaxLayer};
use crate::core::reveal::RevealTarget;
use crate::error::FrontendError;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub const REVEAL_SELECTOR: &str =
    ".service-card, .feature-card, .process-step, .portfolio-card, .pricing-card";
pub const REVEAL_MARKER_CLASS: &str = "animate-on-scroll";
pub const REVEALED_CLASS: &str = "animate-in";
const CARD_SELECTOR: &str = ".service-card, .feature-card, .portfolio-card";
const BACK_TO_TOP_ID: &str = "backToTop";

/// Returns the element's id, assigning `prefix-n` first if it has none.
fn ensure_id(element: &Element, prefix: &str, n: usize) -> String {
    let id = element.id();
    if !id.is_empty() {
        return id;
    }
    let id = format!("{prefix}-{n}");
    element.set_id(&id);
    id
}

fn child_index(element: &Element) -> usize {
    let Some(parent) = element.parent_element() else {
        return 0;
    };
    let children = parent.children();
    (0..children.length())
        .find(|&i| children.item(i).as_ref() == Some(element))
        .map_or(0, |i| i as usize)
}

pub fn scan_layout() -> Result<PageLayout, FrontendError> {
    let sections = super::query_all("section[id]")?
        .into_iter()
        .map(|section| NavSection { id: section.id() })
        .collect::<Vec<_>>();

    let link_targets = super::query_all(".nav-link")?
        .into_iter()
        .map(|link| {
            link.get_attribute("href")
                .unwrap_or_default()
                .trim_start_matches('#')
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut reveal_targets = Vec::new();
    for (n, element) in super::query_all(REVEAL_SELECTOR)?.into_iter().enumerate() {
        element.class_list().add_1(REVEAL_MARKER_CLASS)?;
        let key = ensure_id(&element, "reveal", n);
        let parent = element
            .parent_element()
            .map(|p| ensure_id(&p, "reveal-group", n))
            .unwrap_or_default();
        reveal_targets.push(RevealTarget {
            key,
            parent,
            child_index: child_index(&element),
        });
    }

    let mut parallax_layers = Vec::new();
    for (selector, kind) in [
        (".hero-particles", ParallaxKind::HeroParticles),
        (".floating-card", ParallaxKind::FloatingCard),
    ] {
        for (n, element) in super::query_all(selector)?.into_iter().enumerate() {
            parallax_layers.push(ParallaxLayer {
                key: ensure_id(&element, selector.trim_start_matches('.'), n),
                kind,
            });
        }
    }

    log::debug!(
        "layout: {} sections, {} links, {} reveal targets, {} parallax layers",
        sections.len(),
        link_targets.len(),
        reveal_targets.len(),
        parallax_layers.len()
    );
    Ok(PageLayout {
        sections,
        link_targets,
        reveal_targets,
        parallax_layers,
    })
}

/// Everything a document-level click means to the page. In-page anchors
/// have their default jump cancelled here since scrolling is handled by
/// the coordinator.
pub fn classify_click(event: &Event) -> Vec<ClickTarget> {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Vec::new();
    };
    let closest = |selector: &str| element.closest(selector).ok().flatten();
    let mut targets = Vec::new();

    if closest(&format!("#{BACK_TO_TOP_ID}")).is_some() {
        targets.push(ClickTarget::BackToTop);
    }
    if let Some(anchor) = closest(r##"a[href^="#"]"##) {
        event.prevent_default();
        let href = anchor.get_attribute("href").unwrap_or_default();
        targets.push(ClickTarget::Anchor {
            target_id: href.trim_start_matches('#').to_string(),
            in_navbar: anchor.class_list().contains("nav-link"),
        });
    }
    if let Some(button) = closest(".btn") {
        targets.push(ClickTarget::Button {
            label: button.text_content().unwrap_or_default(),
        });
    }
    if let Some(card) = closest(CARD_SELECTOR) {
        let title = card
            .query_selector("h3, h4, h5")
            .ok()
            .flatten()
            .and_then(|heading| heading.text_content());
        targets.push(ClickTarget::Card { title });
    }
    targets
}
