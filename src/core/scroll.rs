use super::constants::{
    HERO_PARALLAX_FACTOR, NAV_SCROLL_OFFSET_PX, SIDEBAR_EDGE_REVEAL_PX, SIDEBAR_TOP_ZONE_PX,
};

/// Progress of a section scrolling through the viewport.
///
/// 0 while the section's top edge is at or below the bottom of the viewport,
/// rising linearly over one section height of travel to 1 (the section's
/// bottom edge has reached the bottom of the viewport).
pub fn section_scroll_progress(viewport_height: f64, section_top: f64, section_height: f64) -> f64 {
    let travelled = viewport_height - section_top;
    if section_height <= 0.0 {
        return if travelled > 0.0 { 1.0 } else { 0.0 };
    }
    let p = travelled / section_height;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Height of the progress fill, in percent.
#[inline]
pub fn progress_fill_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * 100.0
}

/// Vertical translation of the hero content; `None` once the hero has
/// scrolled out of view (the last applied offset stays in place).
#[inline]
pub fn hero_parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * HERO_PARALLAX_FACTOR)
}

/// Scroll position that lands a section just below the header.
#[inline]
pub fn nav_scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_SCROLL_OFFSET_PX).max(0.0)
}

/// Quadratic ease-in-out over `duration`: value at `t` moving from `start`
/// by `delta`.
pub fn ease_in_out_quad(t: f64, start: f64, delta: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + delta;
    }
    let t = (t / (duration * 0.5)).clamp(0.0, 2.0);
    if t < 1.0 {
        return delta * 0.5 * t * t + start;
    }
    let t = t - 1.0;
    -delta * 0.5 * (t * (t - 2.0) - 1.0) + start
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarChange {
    Hide,
    Show,
    Unchanged,
}

/// Auto-hiding sidebar: tucks away while scrolling down, returns at the top
/// of the page or when the pointer approaches the left edge.
#[derive(Clone, Debug, Default)]
pub struct SidebarAutoHide {
    last_scroll_y: f64,
    hidden: bool,
}

impl SidebarAutoHide {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> SidebarChange {
        let change = if scroll_y > self.last_scroll_y && scroll_y > SIDEBAR_TOP_ZONE_PX {
            self.set_hidden(true)
        } else if scroll_y <= SIDEBAR_TOP_ZONE_PX {
            self.set_hidden(false)
        } else {
            SidebarChange::Unchanged
        };
        self.last_scroll_y = scroll_y;
        change
    }

    /// Pointer or touch at horizontal position `client_x`.
    pub fn on_pointer(&mut self, client_x: f64) -> SidebarChange {
        if client_x <= SIDEBAR_EDGE_REVEAL_PX {
            self.set_hidden(false)
        } else {
            SidebarChange::Unchanged
        }
    }

    fn set_hidden(&mut self, hidden: bool) -> SidebarChange {
        if self.hidden == hidden {
            return SidebarChange::Unchanged;
        }
        self.hidden = hidden;
        if hidden {
            SidebarChange::Hide
        } else {
            SidebarChange::Show
        }
    }
}
