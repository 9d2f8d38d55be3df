//! The host window: document layout, viewport geometry and the events they produce.
//!
//! folio never touches a real browser. Instead the front end owns a [`Window`] which holds the
//! laid-out sections (a [`Document`]), the scroll offset and the viewport size, and which emits
//! scroll, resize and key events to listeners registered through [`crate::listener`]. Intersection
//! observation is built on the same machinery: an observer recomputes its entries on every frame
//! and reports only threshold crossings, the way an `IntersectionObserver` does.
//!
//! All coordinates are in pixels, measured from the top of the document.

use crate::listener::{Listeners, Subscription};
use crate::section::SectionId;
use crate::shortcuts::KeyPress;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Intersection ratios at which an observer reports a change.
pub const THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A mounted section's vertical extent.
pub struct Region {
    /// Section occupying this region.
    pub id: SectionId,
    /// Offset of the region's top edge.
    pub top: u32,
    /// Height of the region.
    pub height: u32,
}

impl Region {
    #[must_use]
    /// Offset just past the region's bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The laid-out page: regions in document order.
pub struct Document {
    regions: Vec<Region>,
}

impl Document {
    #[must_use]
    /// Builds a document from regions in document order.
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    #[must_use]
    /// Stacks sections of the given heights from the top of the page.
    pub fn stacked(heights: &[(SectionId, u32)]) -> Self {
        let mut top = 0u32;
        let regions = heights
            .iter()
            .map(|&(id, height)| {
                let region = Region { id, top, height };
                top = top.saturating_add(height);
                region
            })
            .collect();
        Self { regions }
    }

    #[must_use]
    /// All regions in document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    /// Total scrollable height.
    pub fn height(&self) -> u32 {
        self.regions.iter().map(Region::bottom).max().unwrap_or(0)
    }
}

/// Resolves a section to its mounted region.
pub trait RegionLookup {
    /// The region for `id`, if one is mounted. Duplicate ids resolve to the first match.
    fn region(&self, id: SectionId) -> Option<Region>;
}

impl RegionLookup for Document {
    fn region(&self, id: SectionId) -> Option<Region> {
        self.regions.iter().find(|region| region.id == id).copied()
    }
}

/// Performs animated scrolling. Requests are fire-and-forget.
pub trait SmoothScroll {
    /// Starts an animated scroll towards `offset`.
    fn smooth_scroll_to(&self, offset: u32);

    /// Starts an animated scroll that aligns the region's top with the viewport's top.
    fn scroll_into_view(&self, region: Region) {
        self.smooth_scroll_to(region.top);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Vertical band of the viewport, given as insets from its top and bottom edges.
pub struct Band {
    /// Pixels removed from the top of the viewport.
    pub top_inset: u32,
    /// Pixels removed from the bottom of the viewport.
    pub bottom_inset: u32,
}

impl Band {
    #[must_use]
    /// The scroll-spy band for a header `offset`: `offset` off the top, `100 - offset` off the
    /// bottom.
    pub const fn for_offset(offset: u32) -> Self {
        Self {
            top_inset: offset,
            bottom_inset: 100u32.saturating_sub(offset),
        }
    }

    #[must_use]
    /// The band in document coordinates as `(start, end)`; empty when the insets overlap.
    pub fn span(&self, frame: Frame) -> (u32, u32) {
        let start = frame.scroll_y.saturating_add(self.top_inset);
        let end = frame
            .scroll_y
            .saturating_add(frame.viewport_height)
            .saturating_sub(self.bottom_inset)
            .max(start);
        (start, end)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Viewport geometry at one instant.
pub struct Frame {
    /// Current scroll offset.
    pub scroll_y: u32,
    /// Visible height.
    pub viewport_height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One observed section's visibility after a threshold crossing.
pub struct IntersectionEntry {
    /// The observed section.
    pub target: SectionId,
    /// Whether any part of the section lies inside the band.
    pub is_intersecting: bool,
    /// Visible fraction of the section, in `[0, 1]`.
    pub ratio: f64,
}

#[must_use]
/// Whether `region` overlaps the band `[start, end)` and by what fraction of its height.
pub fn intersection(region: Region, start: u32, end: u32) -> (bool, f64) {
    if start >= end || region.top >= end || region.bottom() <= start {
        return (false, 0.0);
    }
    if region.height == 0 {
        return (true, 1.0);
    }
    let visible = region.bottom().min(end) - region.top.max(start);
    (true, f64::from(visible) / f64::from(region.height))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Crossing {
    intersecting: bool,
    level: usize,
}

impl Crossing {
    fn of(intersecting: bool, ratio: f64) -> Self {
        let level = if intersecting {
            THRESHOLDS.iter().filter(|t| ratio >= **t).count()
        } else {
            0
        };
        Self {
            intersecting,
            level,
        }
    }
}

/// Watches a fixed set of sections against a band and reports threshold crossings.
///
/// The first update reports every target that has a region; later updates only report targets
/// whose intersecting state or threshold level changed.
#[derive(Debug)]
pub struct IntersectionObserver {
    band: Band,
    targets: Vec<(SectionId, Option<Crossing>)>,
}

impl IntersectionObserver {
    #[must_use]
    /// Observes `targets` through `band`.
    pub fn new(band: Band, targets: Vec<SectionId>) -> Self {
        Self {
            band,
            targets: targets.into_iter().map(|id| (id, None)).collect(),
        }
    }

    /// Sections under observation.
    pub fn targets(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.targets.iter().map(|(id, _)| *id)
    }

    /// Recomputes visibility and returns the entries whose crossing changed.
    pub fn update(&mut self, lookup: &impl RegionLookup, frame: Frame) -> Vec<IntersectionEntry> {
        let (start, end) = self.band.span(frame);
        let mut entries = Vec::new();

        for (id, last) in &mut self.targets {
            let Some(region) = lookup.region(*id) else {
                *last = None;
                continue;
            };
            let (is_intersecting, ratio) = intersection(region, start, end);
            let crossing = Crossing::of(is_intersecting, ratio);
            if *last != Some(crossing) {
                *last = Some(crossing);
                entries.push(IntersectionEntry {
                    target: *id,
                    is_intersecting,
                    ratio,
                });
            }
        }

        entries
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Delivered after every change of scroll offset.
pub struct ScrollEvent {
    /// The new offset.
    pub offset: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Delivered after the viewport changes size.
pub struct ResizeEvent {
    /// New viewport width.
    pub width: u32,
    /// New viewport height.
    pub height: u32,
}

/// The host environment a page view is mounted in.
///
/// Listener callbacks run synchronously inside the call that caused them (`scroll_to`, `resize`,
/// `key`, `tick`, `set_document`), one event at a time and in the order the changes happened.
pub struct Window {
    document: Rc<RefCell<Document>>,
    scroll_y: Cell<u32>,
    width: Cell<u32>,
    height: Cell<u32>,
    scroll_target: Cell<Option<u32>>,
    scroll: Listeners<ScrollEvent>,
    resize: Listeners<ResizeEvent>,
    keys: Listeners<KeyPress>,
    frames: Listeners<Frame>,
}

impl Window {
    #[must_use]
    /// Creates an empty window with the given viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            document: Rc::new(RefCell::new(Document::default())),
            scroll_y: Cell::new(0),
            width: Cell::new(width),
            height: Cell::new(height),
            scroll_target: Cell::new(None),
            scroll: Listeners::new(),
            resize: Listeners::new(),
            keys: Listeners::new(),
            frames: Listeners::new(),
        }
    }

    // --- <Geometry> ---

    #[must_use]
    /// Current scroll offset.
    pub fn scroll_y(&self) -> u32 {
        self.scroll_y.get()
    }

    #[must_use]
    /// Viewport width.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    #[must_use]
    /// Viewport height.
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    #[must_use]
    /// Height of the mounted document.
    pub fn document_height(&self) -> u32 {
        self.document.borrow().height()
    }

    #[must_use]
    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.document_height().saturating_sub(self.height())
    }

    #[must_use]
    /// Snapshot of the current viewport geometry.
    pub fn frame(&self) -> Frame {
        Frame {
            scroll_y: self.scroll_y(),
            viewport_height: self.height(),
        }
    }

    /// Replaces the laid-out document and re-evaluates observers.
    pub fn set_document(&self, document: Document) {
        *self.document.borrow_mut() = document;
        let clamped = self.scroll_y().min(self.max_scroll());
        if clamped == self.scroll_y() {
            self.emit_frame();
        } else {
            self.apply_scroll(clamped);
        }
    }

    /// Changes the viewport size.
    pub fn resize(&self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        self.width.set(width);
        self.height.set(height);
        tracing::trace!(width, height, "viewport resized");
        self.resize.emit(&mut ResizeEvent { width, height });

        let clamped = self.scroll_y().min(self.max_scroll());
        if clamped == self.scroll_y() {
            self.emit_frame();
        } else {
            self.apply_scroll(clamped);
        }
    }

    // --- </Geometry> ---

    // --- <Scrolling> ---

    /// Jumps to `offset` immediately, cancelling any animated scroll.
    pub fn scroll_to(&self, offset: u32) {
        self.scroll_target.set(None);
        self.apply_scroll(offset);
    }

    /// Scrolls by a signed amount immediately, cancelling any animated scroll.
    pub fn scroll_by(&self, delta: i64) {
        let target = i64::from(self.scroll_y()).saturating_add(delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    #[must_use]
    /// Whether an animated scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.scroll_target.get().is_some()
    }

    /// Advances an animated scroll by one step. Returns whether more steps remain.
    pub fn tick(&self) -> bool {
        let Some(target) = self.scroll_target.get() else {
            return false;
        };
        let target = target.min(self.max_scroll());
        let current = self.scroll_y();
        if current == target {
            self.scroll_target.set(None);
            return false;
        }
        let distance = current.abs_diff(target);
        let step = (distance / 4).max(1).min(distance);
        let next = if target > current {
            current + step
        } else {
            current - step
        };

        if next == target {
            self.scroll_target.set(None);
        }
        self.apply_scroll(next);
        self.scroll_target.get().is_some()
    }

    fn apply_scroll(&self, offset: u32) {
        let offset = offset.min(self.max_scroll());
        if offset == self.scroll_y() {
            return;
        }
        self.scroll_y.set(offset);
        self.scroll.emit(&mut ScrollEvent { offset });
        self.emit_frame();
    }

    fn emit_frame(&self) {
        let mut frame = self.frame();
        self.frames.emit(&mut frame);
    }

    // --- </Scrolling> ---

    // --- <Input> ---

    /// Delivers a key press to key listeners and hands it back so the caller can check whether
    /// default handling was prevented.
    pub fn key(&self, mut press: KeyPress) -> KeyPress {
        self.keys.emit(&mut press);
        press
    }

    // --- </Input> ---

    // --- <Listeners> ---

    /// Listens for scroll offset changes.
    pub fn on_scroll(&self, handler: impl Fn(&mut ScrollEvent) + 'static) -> Subscription {
        self.scroll.listen(handler)
    }

    /// Listens for viewport size changes.
    pub fn on_resize(&self, handler: impl Fn(&mut ResizeEvent) + 'static) -> Subscription {
        self.resize.listen(handler)
    }

    /// Listens for key presses.
    pub fn on_key(&self, handler: impl Fn(&mut KeyPress) + 'static) -> Subscription {
        self.keys.listen(handler)
    }

    /// Observes `targets` through `band`, calling `callback` with every batch of crossings.
    ///
    /// Sections without a mounted region are skipped until a later document provides one. The first
    /// batch is delivered before this returns.
    pub fn observe_intersections<F>(
        &self,
        band: Band,
        targets: &[SectionId],
        callback: F,
    ) -> Subscription
    where
        F: Fn(&[IntersectionEntry]) + 'static,
    {
        let document = Rc::clone(&self.document);
        {
            let doc = document.borrow();
            for id in targets.iter().filter(|id| doc.region(**id).is_none()) {
                tracing::debug!(section = %id, "no mounted region yet");
            }
        }

        let observer = RefCell::new(IntersectionObserver::new(band, targets.to_vec()));
        let initial = observer.borrow_mut().update(&*document.borrow(), self.frame());
        if !initial.is_empty() {
            callback(&initial);
        }

        self.frames.listen(move |frame: &mut Frame| {
            let entries = observer.borrow_mut().update(&*document.borrow(), *frame);
            if !entries.is_empty() {
                callback(&entries);
            }
        })
    }

    #[must_use]
    /// Total live registrations across every event kind.
    pub fn listener_count(&self) -> usize {
        self.scroll.len() + self.resize.len() + self.keys.len() + self.frames.len()
    }

    // --- </Listeners> ---
}

impl RegionLookup for Window {
    fn region(&self, id: SectionId) -> Option<Region> {
        self.document.borrow().region(id)
    }
}

impl SmoothScroll for Window {
    fn smooth_scroll_to(&self, offset: u32) {
        let target = offset.min(self.max_scroll());
        if target == self.scroll_y() {
            self.scroll_target.set(None);
            return;
        }
        tracing::debug!(from = self.scroll_y(), to = target, "smooth scroll requested");
        self.scroll_target.set(Some(target));
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
