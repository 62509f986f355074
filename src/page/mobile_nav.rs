// Collapsible navigation for narrow viewports

/// Widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 760;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDisplay {
    /// Wide viewport: links laid out inline, toggle hidden.
    Inline,
    /// Narrow viewport, panel expanded.
    Panel,
    /// Narrow viewport, panel collapsed.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileNav {
    width: u32,
    open: bool,
}

impl MobileNav {
    pub fn new(width: u32) -> Self {
        Self { width, open: false }
    }

    pub fn is_narrow(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT_PX
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_visible(&self) -> bool {
        self.is_narrow()
    }

    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    pub fn display(&self) -> NavDisplay {
        match (self.is_narrow(), self.open) {
            (false, _) => NavDisplay::Inline,
            (true, true) => NavDisplay::Panel,
            (true, false) => NavDisplay::Hidden,
        }
    }

    /// Any resize collapses the panel.
    pub fn resize(&mut self, width: u32) {
        self.width = width;
        self.open = false;
    }

    /// Toggle button press; ignored while the button is hidden.
    pub fn toggle(&mut self) -> bool {
        if self.is_narrow() {
            self.open = !self.open;
        }
        self.open
    }

    /// Following a nav link closes the panel on narrow viewports.
    pub fn link_clicked(&mut self) {
        if self.is_narrow() {
            self.open = false;
        }
    }
}
