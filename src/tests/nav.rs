use super::Navigator;
use crate::section::SectionId;
use crate::viewport::{Document, Region, RegionLookup, SmoothScroll, Window};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingScroller {
    requests: RefCell<Vec<u32>>,
}

impl SmoothScroll for RecordingScroller {
    fn smooth_scroll_to(&self, offset: u32) {
        self.requests.borrow_mut().push(offset);
    }
}

fn navigator_over(document: Document) -> (Navigator, Rc<RecordingScroller>) {
    let scroller = Rc::new(RecordingScroller::default());
    let lookup: Rc<dyn RegionLookup> = Rc::new(document);
    let sink: Rc<dyn SmoothScroll> = scroller.clone();
    (Navigator::new(lookup, sink), scroller)
}

#[test]
fn test_navigate_scrolls_to_region_top_and_closes_overlay() {
    let (nav, scroller) = navigator_over(Document::new(vec![Region {
        id: SectionId::Projects,
        top: 1500,
        height: 900,
    }]));
    nav.toggle_overlay();
    assert!(nav.overlay_open());

    assert!(nav.navigate_to(SectionId::Projects));
    assert_eq!(*scroller.requests.borrow(), vec![1500]);
    assert!(!nav.overlay_open());
}

#[test]
fn test_missing_section_is_a_noop() {
    let (nav, scroller) = navigator_over(Document::default());
    nav.toggle_overlay();

    assert!(!nav.navigate_to(SectionId::Contact));
    assert!(scroller.requests.borrow().is_empty());
    assert!(nav.overlay_open());
}

#[test]
fn test_clones_share_overlay_state() {
    let (nav, _scroller) = navigator_over(Document::default());
    let other = nav.clone();
    assert!(nav.toggle_overlay());
    assert!(other.overlay_open());
    other.close_overlay();
    assert!(!nav.overlay_open());
}

#[test]
fn test_window_navigation_animates_into_place() {
    let window = Rc::new(Window::new(100, 500));
    window.set_document(Document::stacked(&[
        (SectionId::Hero, 600),
        (SectionId::About, 900),
        (SectionId::Contact, 600),
    ]));
    let nav = Navigator::for_window(&window);

    assert!(nav.navigate_to(SectionId::About));
    assert_eq!(window.scroll_y(), 0);
    while window.tick() {}
    assert_eq!(window.scroll_y(), 600);

    nav.scroll_to_top();
    while window.tick() {}
    assert_eq!(window.scroll_y(), 0);
}
