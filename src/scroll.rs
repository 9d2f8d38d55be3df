//! Scroll direction and position tracking.
//!
//! Each scroll event is compared with the previous offset to derive a direction. The derived
//! chrome rules (header shadow, header hiding, scroll-to-top) are pure functions of the latest
//! sample so every surface that reads them agrees.

use crate::listener::Subscription;
use crate::viewport::{ScrollEvent, Window};
use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Discretised scroll direction.
pub enum Direction {
    /// No movement observed yet.
    #[default]
    None,
    /// Offset decreased.
    Up,
    /// Offset increased.
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The latest scroll observation.
pub struct ScrollSample {
    /// Direction of the most recent change.
    pub direction: Direction,
    /// Current offset.
    pub offset: u32,
}

impl ScrollSample {
    #[must_use]
    /// The sample after observing `offset`. An unchanged offset keeps the previous direction.
    pub fn advance(self, offset: u32) -> Self {
        let direction = match offset.cmp(&self.offset) {
            Ordering::Greater => Direction::Down,
            Ordering::Less => Direction::Up,
            Ordering::Equal => self.direction,
        };
        Self { direction, offset }
    }

    #[must_use]
    /// Whether the page has left its resting position (the header gains a backdrop).
    pub fn is_scrolled(&self, thresholds: &ChromeThresholds) -> bool {
        self.offset > thresholds.scrolled
    }

    #[must_use]
    /// Whether the header slides away: scrolling down, past the hide threshold, with no overlay
    /// menu open.
    pub fn header_hidden(&self, thresholds: &ChromeThresholds, overlay_open: bool) -> bool {
        self.direction == Direction::Down && self.offset > thresholds.hide && !overlay_open
    }

    #[must_use]
    /// Whether the scroll-to-top button is offered.
    pub fn shows_scroll_to_top(&self, thresholds: &ChromeThresholds) -> bool {
        self.offset > thresholds.scroll_top
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Offsets at which the chrome changes.
pub struct ChromeThresholds {
    /// Past this the header is drawn as scrolled.
    pub scrolled: u32,
    /// Past this, scrolling down hides the header.
    pub hide: u32,
    /// Past this the scroll-to-top button appears.
    pub scroll_top: u32,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            scrolled: 50,
            hide: 200,
            scroll_top: 300,
        }
    }
}

#[must_use]
/// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
pub fn progress(offset: u32, document_height: u32, viewport_height: u32) -> f64 {
    let scrollable = document_height.saturating_sub(viewport_height);
    if scrollable == 0 {
        return 0.0;
    }
    (f64::from(offset) / f64::from(scrollable)).clamp(0.0, 1.0)
}

/// Publishes the live scroll sample for one mounted view.
pub struct ScrollTracker {
    sample: Rc<Cell<ScrollSample>>,
    _listener: Subscription,
}

impl ScrollTracker {
    #[must_use]
    /// Starts tracking from the window's current offset.
    pub fn mount(window: &Window) -> Self {
        let sample = Rc::new(Cell::new(ScrollSample {
            direction: Direction::None,
            offset: window.scroll_y(),
        }));
        let latest = Rc::clone(&sample);
        let listener = window.on_scroll(move |event: &mut ScrollEvent| {
            latest.set(latest.get().advance(event.offset));
        });

        Self {
            sample,
            _listener: listener,
        }
    }

    #[must_use]
    /// The most recent sample.
    pub fn sample(&self) -> ScrollSample {
        self.sample.get()
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
