use super::constants::MOBILE_BREAKPOINT_PX;

pub const GLYPH_CLOSED: &str = "☰";
pub const GLYPH_OPEN: &str = "✕";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChange {
    CreateToggle,
    /// Remove the toggle button and close the sidebar.
    RemoveToggle,
    Unchanged,
}

/// Mobile navigation: a floating toggle button below the breakpoint that
/// slides the sidebar open.
#[derive(Clone, Debug, Default)]
pub struct MobileMenu {
    has_toggle: bool,
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_toggle(&self) -> bool {
        self.has_toggle
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_viewport_width(&mut self, width: f64) -> MenuChange {
        let mobile = width <= MOBILE_BREAKPOINT_PX;
        if mobile && !self.has_toggle {
            self.has_toggle = true;
            MenuChange::CreateToggle
        } else if !mobile && (self.has_toggle || self.open) {
            self.has_toggle = false;
            self.open = false;
            MenuChange::RemoveToggle
        } else {
            MenuChange::Unchanged
        }
    }

    /// Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn glyph(&self) -> &'static str {
        if self.open {
            GLYPH_OPEN
        } else {
            GLYPH_CLOSED
        }
    }
}
