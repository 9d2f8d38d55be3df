//! Scroll-spy: which section is active.
//!
//! The tracker observes every registered section through the header band and, whenever a section
//! starts intersecting, makes it the active one. Leaving a section never clears the active value;
//! only another section entering the band replaces it.

use crate::error::{Error, Result};
use crate::listener::Subscription;
use crate::section::SectionId;
use crate::viewport::{Band, IntersectionEntry, Window};
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How one batch of intersection entries is reduced to a single active section.
pub enum TieBreak {
    /// The last intersecting entry wins, regardless of ratio or document order.
    #[default]
    LatestEntry,
    /// The intersecting entry with the largest visible ratio wins; equal ratios favour the later
    /// entry.
    GreatestRatio,
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "latest" => Ok(Self::LatestEntry),
            "ratio" => Ok(Self::GreatestRatio),
            other => Err(Error::unknown("tie-break policy", other)),
        }
    }
}

#[must_use]
/// Picks the section a batch of entries makes active, if any entry is intersecting.
pub fn pick_active(entries: &[IntersectionEntry], tie_break: TieBreak) -> Option<SectionId> {
    let mut intersecting = entries.iter().filter(|entry| entry.is_intersecting);
    match tie_break {
        TieBreak::LatestEntry => intersecting.last().map(|entry| entry.target),
        TieBreak::GreatestRatio => intersecting
            .fold(None::<&IntersectionEntry>, |best, entry| match best {
                Some(best) if best.ratio > entry.ratio => Some(best),
                _ => Some(entry),
            })
            .map(|entry| entry.target),
    }
}

/// Publishes the active section for one mounted view.
///
/// The active value is owned here and only readable from outside.
pub struct VisibilityTracker {
    active: Rc<Cell<Option<SectionId>>>,
    sections: Vec<SectionId>,
    offset: u32,
    tie_break: TieBreak,
    observation: Option<Subscription>,
}

impl VisibilityTracker {
    #[must_use]
    /// Starts observing `sections` through the band for `offset`.
    pub fn mount(
        window: &Window,
        sections: &[SectionId],
        offset: u32,
        tie_break: TieBreak,
    ) -> Self {
        let mut tracker = Self {
            active: Rc::new(Cell::new(None)),
            sections: sections.to_vec(),
            offset,
            tie_break,
            observation: None,
        };
        tracker.subscribe(window);
        tracker
    }

    fn subscribe(&mut self, window: &Window) {
        let active = Rc::clone(&self.active);
        let tie_break = self.tie_break;
        self.observation = Some(window.observe_intersections(
            Band::for_offset(self.offset),
            &self.sections,
            move |entries| {
                if let Some(id) = pick_active(entries, tie_break) {
                    if active.get() != Some(id) {
                        tracing::debug!(section = %id, "active section changed");
                    }
                    active.set(Some(id));
                }
            },
        ));
    }

    #[must_use]
    /// The section currently considered in view, if any has intersected yet.
    pub fn active(&self) -> Option<SectionId> {
        self.active.get()
    }

    #[must_use]
    /// Sections under observation.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    #[must_use]
    /// Header offset the band is built from.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Replaces the observed sections or offset.
    ///
    /// The previous observations are released before the new ones are made. The active section
    /// is kept until a new intersection replaces it.
    pub fn retarget(&mut self, window: &Window, sections: &[SectionId], offset: u32) {
        if sections == self.sections.as_slice() && offset == self.offset {
            return;
        }
        self.observation = None;
        self.sections = sections.to_vec();
        self.offset = offset;
        self.subscribe(window);
    }
}

#[cfg(test)]
#[path = "tests/spy.rs"]
mod tests;
