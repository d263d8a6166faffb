use crate::core::viewport::{Rect, ViewportProbe};

/// A page section that a navigation link can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: String,
    pub active: bool,
}

/// Picks the section that contains the anchor line.
///
/// Sections are scanned in document order and the last one containing the
/// line wins. Sections overlap while transition animations run, and the
/// later section is the one scrolling into place, so keep this tie-break
/// when touching the loop.
pub fn select_active<'a, I>(sections: I, anchor_line: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a NavSection, Option<Rect>)>,
{
    let mut candidate = None;
    for (section, rect) in sections {
        let Some(rect) = rect else {
            continue;
        };
        if rect.contains_line(anchor_line) {
            candidate = Some(section.id.as_str());
        }
    }
    candidate
}

/// Reflects the active section into exactly one navigation link.
#[derive(Debug, Clone)]
pub struct ActiveSectionSelector {
    sections: Vec<NavSection>,
    links: Vec<NavLink>,
    anchor_line: f64,
}

impl ActiveSectionSelector {
    pub fn new(sections: Vec<NavSection>, link_targets: Vec<String>, anchor_line: f64) -> Self {
        let links = link_targets
            .into_iter()
            .map(|target| NavLink {
                target,
                active: false,
            })
            .collect();
        Self {
            sections,
            links,
            anchor_line,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.target.as_str())
    }

    /// Recomputes the active section and rewrites every link flag, whether
    /// or not the candidate changed.
    pub fn tick(&mut self, viewport: &dyn ViewportProbe) -> Option<String> {
        let current = select_active(
            self.sections
                .iter()
                .map(|section| (section, viewport.bounds_of(&section.id))),
            self.anchor_line,
        )
        .map(str::to_string);

        for link in &mut self.links {
            link.active = current.as_deref() == Some(link.target.as_str());
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::fake::FakeViewport;

    fn sections(ids: &[&str]) -> Vec<NavSection> {
        ids.iter()
            .map(|id| NavSection { id: id.to_string() })
            .collect()
    }

    fn selector(ids: &[&str]) -> ActiveSectionSelector {
        ActiveSectionSelector::new(
            sections(ids),
            ids.iter().map(|id| id.to_string()).collect(),
            150.0,
        )
    }

    #[test]
    fn last_overlapping_section_wins() {
        let mut selector = selector(&["a", "b"]);
        let viewport = FakeViewport::at(0.0)
            .with_rect("a", 0.0, 200.0)
            .with_rect("b", 100.0, 400.0);
        assert_eq!(selector.tick(&viewport).as_deref(), Some("b"));
        assert_eq!(selector.active_link(), Some("b"));
    }

    #[test]
    fn section_starting_below_anchor_does_not_match() {
        let mut selector = selector(&["a", "b"]);
        let viewport = FakeViewport::at(0.0)
            .with_rect("a", 0.0, 200.0)
            .with_rect("b", 180.0, 400.0);
        assert_eq!(selector.tick(&viewport).as_deref(), Some("a"));
    }

    #[test]
    fn anchor_line_bounds_are_inclusive() {
        let list = sections(&["top", "bottom"]);
        let picked = select_active(
            vec![
                (&list[0], Some(Rect::vertical(-300.0, 150.0))),
                (&list[1], Some(Rect::vertical(150.0, 900.0))),
            ],
            150.0,
        );
        assert_eq!(picked, Some("bottom"));
    }

    #[test]
    fn no_match_clears_every_link() {
        let mut selector = selector(&["a", "b"]);
        let viewport = FakeViewport::at(0.0).with_rect("a", 0.0, 400.0);
        selector.tick(&viewport);
        assert_eq!(selector.active_link(), Some("a"));

        let viewport = FakeViewport::at(0.0)
            .with_rect("a", 200.0, 400.0)
            .with_rect("b", 400.0, 900.0);
        assert_eq!(selector.tick(&viewport), None);
        assert!(selector.links().iter().all(|link| !link.active));
    }

    #[test]
    fn detached_sections_are_skipped() {
        let mut selector = selector(&["a", "gone", "c"]);
        let viewport = FakeViewport::at(0.0)
            .with_rect("a", 0.0, 300.0)
            .with_rect("c", 500.0, 900.0);
        assert_eq!(selector.tick(&viewport).as_deref(), Some("a"));
    }

    #[test]
    fn at_most_one_link_is_active() {
        let mut selector = selector(&["a", "b", "c"]);
        let viewport = FakeViewport::at(0.0)
            .with_rect("a", 0.0, 500.0)
            .with_rect("b", 100.0, 500.0)
            .with_rect("c", 140.0, 500.0);
        selector.tick(&viewport);
        let active: Vec<_> = selector.links().iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, "c");
    }
}
