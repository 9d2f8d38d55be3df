//! Navigation dispatcher and the overlay menu flag.

use crate::section::SectionId;
use crate::viewport::{RegionLookup, SmoothScroll, Window};
use std::cell::Cell;
use std::rc::Rc;

/// Scrolls to sections on request and owns the overlay navigation flag.
///
/// Clones share the same overlay flag, so the header, the shortcut router and the bottom nav all
/// see one menu state.
#[derive(Clone)]
pub struct Navigator {
    lookup: Rc<dyn RegionLookup>,
    scroller: Rc<dyn SmoothScroll>,
    overlay: Rc<Cell<bool>>,
}

impl Navigator {
    #[must_use]
    /// Builds a navigator from a region lookup and a scroller.
    pub fn new(lookup: Rc<dyn RegionLookup>, scroller: Rc<dyn SmoothScroll>) -> Self {
        Self {
            lookup,
            scroller,
            overlay: Rc::new(Cell::new(false)),
        }
    }

    #[must_use]
    /// Navigator backed by a host window for both lookup and scrolling.
    pub fn for_window(window: &Rc<Window>) -> Self {
        let lookup: Rc<dyn RegionLookup> = window.clone();
        let scroller: Rc<dyn SmoothScroll> = window.clone();
        Self::new(lookup, scroller)
    }

    /// Smooth-scrolls to `id` and closes the overlay menu.
    ///
    /// Returns whether a scroll was requested. A section that is not mounted yet is a no-op and
    /// leaves the overlay as it was.
    pub fn navigate_to(&self, id: SectionId) -> bool {
        let Some(region) = self.lookup.region(id) else {
            tracing::debug!(section = %id, "navigation target not mounted");
            return false;
        };
        tracing::debug!(section = %id, top = region.top, "navigating");
        self.scroller.scroll_into_view(region);
        self.overlay.set(false);
        true
    }

    /// Smooth-scrolls back to the top of the page.
    pub fn scroll_to_top(&self) {
        self.scroller.smooth_scroll_to(0);
    }

    #[must_use]
    /// Whether the overlay menu is open.
    pub fn overlay_open(&self) -> bool {
        self.overlay.get()
    }

    /// Opens or closes the overlay menu; returns the new state.
    pub fn toggle_overlay(&self) -> bool {
        let open = !self.overlay.get();
        self.overlay.set(open);
        open
    }

    /// Closes the overlay menu.
    pub fn close_overlay(&self) {
        self.overlay.set(false);
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
