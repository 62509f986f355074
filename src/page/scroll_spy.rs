// Scroll-spy: highlight nav links for sections in view

use super::Intersection;
use std::collections::BTreeSet;

/// Visible share at which a section counts as current.
pub const SCROLL_SPY_THRESHOLD: f64 = 0.45;

#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: BTreeSet<String>,
    /// Link hrefs, e.g. `#status`.
    links: Vec<String>,
    active: BTreeSet<String>,
}

impl ScrollSpy {
    pub fn new<S, L>(sections: S, links: L) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            links: links.into_iter().map(Into::into).collect(),
            active: BTreeSet::new(),
        }
    }

    /// Applies one batch of reports. If any tracked section is in view, the
    /// active set becomes the links of every section in view in this batch;
    /// otherwise it is left alone. Several links can end up active.
    pub fn on_intersections(&mut self, entries: &[Intersection]) -> &BTreeSet<String> {
        let in_view: BTreeSet<String> = entries
            .iter()
            .filter(|e| e.crosses(SCROLL_SPY_THRESHOLD) && self.sections.contains(&e.id))
            .map(|e| format!("#{}", e.id))
            .collect();
        if !in_view.is_empty() {
            self.active = self
                .links
                .iter()
                .filter(|href| in_view.contains(*href))
                .cloned()
                .collect();
        }
        &self.active
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active.contains(href)
    }

    pub fn active(&self) -> &BTreeSet<String> {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(
            ["about", "status", "commands"],
            ["#about", "#status", "#commands"],
        )
    }

    #[test]
    fn section_in_view_activates_its_link() {
        let mut spy = spy();
        spy.on_intersections(&[Intersection::new("status", 0.6)]);
        assert!(spy.is_active("#status"));
        assert_eq!(spy.active().len(), 1);
    }

    #[test]
    fn below_threshold_keeps_previous_state() {
        let mut spy = spy();
        spy.on_intersections(&[Intersection::new("about", 0.9)]);
        spy.on_intersections(&[Intersection::new("status", 0.3)]);
        assert!(spy.is_active("#about"));
        assert!(!spy.is_active("#status"));
    }

    #[test]
    fn simultaneous_sections_can_both_be_active() {
        let mut spy = spy();
        spy.on_intersections(&[
            Intersection::new("about", 0.5),
            Intersection::new("status", 0.45),
        ]);
        assert!(spy.is_active("#about"));
        assert!(spy.is_active("#status"));
    }

    #[test]
    fn new_section_replaces_previous_highlight() {
        let mut spy = spy();
        spy.on_intersections(&[Intersection::new("about", 0.9)]);
        spy.on_intersections(&[Intersection::new("commands", 0.7)]);
        assert!(!spy.is_active("#about"));
        assert!(spy.is_active("#commands"));
    }

    #[test]
    fn untracked_sections_are_ignored() {
        let mut spy = spy();
        spy.on_intersections(&[Intersection::new("footer", 1.0)]);
        assert!(spy.active().is_empty());
    }
}
