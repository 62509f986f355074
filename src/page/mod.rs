// Client-side page behaviours modelled as plain state machines

mod fade_in;
mod mobile_nav;
mod scroll_spy;
mod theme;

pub use fade_in::{FADE_IN_THRESHOLD, FadeIn};
pub use mobile_nav::{MOBILE_BREAKPOINT_PX, MobileNav, NavDisplay};
pub use scroll_spy::{SCROLL_SPY_THRESHOLD, ScrollSpy};
pub use theme::{
    PULSE_DURATION, THEME_KEY, ThemeError, ThemeStore, ThemeToggle, toggle_shared,
};

/// One visibility report for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    /// Visible share of the element, 0.0 to 1.0.
    pub ratio: f64,
}

impl Intersection {
    pub fn new(id: impl Into<String>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }

    pub(crate) fn crosses(&self, threshold: f64) -> bool {
        self.ratio > 0.0 && self.ratio >= threshold
    }
}
