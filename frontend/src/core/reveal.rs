//! One-shot reveal animations with a staggered sibling cascade.

use std::collections::HashSet;

/// An observed element. `parent` groups siblings; `child_index` is the
/// element's position among all of its parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub key: String,
    pub parent: String,
    pub child_index: usize,
}

/// Result of one intersection: the element to reveal right away and the
/// sibling reveals to schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealPlan {
    pub immediate: Option<String>,
    pub staggered: Vec<(String, u32)>,
}

#[derive(Debug, Clone)]
pub struct RevealDispatcher {
    targets: Vec<RevealTarget>,
    revealed: HashSet<String>,
    stagger_ms: u32,
}

impl RevealDispatcher {
    /// `targets` must be in document order.
    pub fn new(targets: Vec<RevealTarget>, stagger_ms: u32) -> Self {
        Self {
            targets,
            revealed: HashSet::new(),
            stagger_ms,
        }
    }

    pub fn is_observed(&self, key: &str) -> bool {
        self.targets.iter().any(|target| target.key == key)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Latches `key` as revealed. Returns `true` only on the first call.
    pub fn reveal(&mut self, key: &str) -> bool {
        if !self.is_observed(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }

    pub fn on_intersection(&mut self, key: &str) -> RevealPlan {
        let Some(parent) = self
            .targets
            .iter()
            .find(|target| target.key == key)
            .map(|target| target.parent.clone())
        else {
            return RevealPlan::default();
        };
        if !self.reveal(key) {
            return RevealPlan::default();
        }

        // duplicate timers for siblings are harmless, reveal() is a latch
        let staggered = self
            .targets
            .iter()
            .filter(|target| target.parent == parent)
            .map(|target| {
                let delay = self.stagger_ms.saturating_mul(target.child_index as u32);
                (target.key.clone(), delay)
            })
            .collect();

        RevealPlan {
            immediate: Some(key.to_string()),
            staggered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(key: &str, parent: &str, child_index: usize) -> RevealTarget {
        RevealTarget {
            key: key.to_string(),
            parent: parent.to_string(),
            child_index,
        }
    }

    fn dispatcher() -> RevealDispatcher {
        RevealDispatcher::new(
            vec![
                target("s1", "services", 0),
                target("s2", "services", 1),
                // index 2 is a non-animated heading
                target("s3", "services", 3),
                target("p1", "pricing", 0),
            ],
            100,
        )
    }

    #[test]
    fn first_intersection_cascades_to_siblings() {
        let mut reveal = dispatcher();
        let plan = reveal.on_intersection("s2");
        assert_eq!(plan.immediate.as_deref(), Some("s2"));
        assert_eq!(
            plan.staggered,
            vec![
                ("s1".to_string(), 0),
                ("s2".to_string(), 100),
                ("s3".to_string(), 300),
            ]
        );
        assert!(!reveal.is_revealed("p1"));
    }

    #[test]
    fn revealed_elements_stay_revealed() {
        let mut reveal = dispatcher();
        reveal.on_intersection("s1");
        assert_eq!(reveal.on_intersection("s1"), RevealPlan::default());
        assert!(reveal.is_revealed("s1"));
        assert!(!reveal.reveal("s1"));
        assert!(reveal.is_revealed("s1"));
    }

    #[test]
    fn sibling_crossing_before_its_timer_still_latches_once() {
        let mut reveal = dispatcher();
        reveal.on_intersection("s1");
        let plan = reveal.on_intersection("s3");
        assert_eq!(plan.immediate.as_deref(), Some("s3"));
        // the cascade timers now run for both triggers
        assert!(reveal.reveal("s2"));
        assert!(!reveal.reveal("s2"));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut reveal = dispatcher();
        assert_eq!(reveal.on_intersection("footer"), RevealPlan::default());
        assert!(!reveal.reveal("footer"));
    }
}
