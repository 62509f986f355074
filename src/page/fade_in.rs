// One-shot staggered entrance: reveal once, then stop watching

use super::Intersection;
use std::collections::BTreeSet;

/// Visible share at which an element is revealed.
pub const FADE_IN_THRESHOLD: f64 = 0.12;

#[derive(Debug, Clone, Default)]
pub struct FadeIn {
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl FadeIn {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            observed: ids.into_iter().map(Into::into).collect(),
            revealed: BTreeSet::new(),
        }
    }

    /// Starts watching `id` unless it was already revealed.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.revealed.contains(&id) {
            self.observed.insert(id);
        }
    }

    /// Reveals observed elements that crossed the threshold and stops
    /// observing them. Returns the newly revealed ids in report order.
    pub fn on_intersections(&mut self, entries: &[Intersection]) -> Vec<String> {
        let mut newly = Vec::new();
        for entry in entries {
            if entry.crosses(FADE_IN_THRESHOLD) && self.observed.remove(&entry.id) {
                self.revealed.insert(entry.id.clone());
                newly.push(entry.id.clone());
            }
        }
        newly
    }

    /// Page-ready path: every staggered element becomes visible at once.
    pub fn reveal_all(&mut self) {
        self.revealed.append(&mut self.observed);
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }
}
