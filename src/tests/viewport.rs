use super::{
    intersection, Band, Document, Frame, IntersectionObserver, Region, RegionLookup, SmoothScroll,
    Window,
};
use crate::section::SectionId;
use std::cell::RefCell;
use std::rc::Rc;

fn page() -> Document {
    Document::stacked(&[
        (SectionId::Hero, 700),
        (SectionId::About, 800),
        (SectionId::Projects, 1000),
        (SectionId::Contact, 700),
    ])
}

#[test]
fn test_stacked_document_layout() {
    let doc = page();
    assert_eq!(doc.height(), 3200);
    assert_eq!(
        doc.region(SectionId::Projects),
        Some(Region {
            id: SectionId::Projects,
            top: 1500,
            height: 1000
        })
    );
}

#[test]
fn test_duplicate_ids_resolve_to_first_match() {
    let doc = Document::new(vec![
        Region {
            id: SectionId::About,
            top: 100,
            height: 50,
        },
        Region {
            id: SectionId::About,
            top: 900,
            height: 50,
        },
    ]);
    assert_eq!(doc.region(SectionId::About).map(|r| r.top), Some(100));
    assert_eq!(doc.region(SectionId::Hero), None);
}

#[test]
fn test_band_for_offset_insets_both_edges() {
    let band = Band::for_offset(80);
    assert_eq!(band.top_inset, 80);
    assert_eq!(band.bottom_inset, 20);
    assert_eq!(Band::for_offset(150).bottom_inset, 0);

    let span = band.span(Frame {
        scroll_y: 1000,
        viewport_height: 600,
    });
    assert_eq!(span, (1080, 1580));
}

#[test]
fn test_band_collapses_when_insets_overlap() {
    let band = Band {
        top_inset: 400,
        bottom_inset: 400,
    };
    let (start, end) = band.span(Frame {
        scroll_y: 0,
        viewport_height: 600,
    });
    assert_eq!(start, end);
    let region = Region {
        id: SectionId::Hero,
        top: 0,
        height: 1000,
    };
    assert_eq!(intersection(region, start, end), (false, 0.0));
}

#[test]
fn test_intersection_ratio() {
    let region = Region {
        id: SectionId::About,
        top: 100,
        height: 400,
    };
    assert_eq!(intersection(region, 0, 200), (true, 0.25));
    assert_eq!(intersection(region, 500, 900), (false, 0.0));
    assert_eq!(intersection(region, 0, 1000), (true, 1.0));
}

#[test]
fn test_observer_reports_initial_state_then_only_crossings() {
    let doc = page();
    let mut observer = IntersectionObserver::new(
        Band::for_offset(80),
        vec![SectionId::Hero, SectionId::About],
    );

    let first = observer.update(
        &doc,
        Frame {
            scroll_y: 0,
            viewport_height: 600,
        },
    );
    assert_eq!(first.len(), 2);
    assert!(first[0].is_intersecting);
    assert!(!first[1].is_intersecting);

    // Hero stays between the 50% and 75% thresholds, About stays outside the band.
    let second = observer.update(
        &doc,
        Frame {
            scroll_y: 1,
            viewport_height: 600,
        },
    );
    assert!(second.is_empty());

    let third = observer.update(
        &doc,
        Frame {
            scroll_y: 400,
            viewport_height: 600,
        },
    );
    let about = third
        .iter()
        .find(|entry| entry.target == SectionId::About)
        .unwrap();
    assert!(about.is_intersecting);
}

#[test]
fn test_window_observation_skips_unmounted_sections() {
    let window = Window::new(100, 600);
    window.set_document(Document::stacked(&[(SectionId::Hero, 700)]));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = window.observe_intersections(
        Band::for_offset(80),
        &[SectionId::Hero, SectionId::Contact],
        move |entries| sink.borrow_mut().extend(entries.iter().map(|e| e.target)),
    );

    assert_eq!(*seen.borrow(), vec![SectionId::Hero]);
}

#[test]
fn test_sections_laid_out_after_observing_are_reported() {
    let window = Window::new(100, 600);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = window.observe_intersections(
        Band::for_offset(80),
        &[SectionId::Hero, SectionId::About],
        move |entries| {
            let entering = entries.iter().filter(|e| e.is_intersecting);
            sink.borrow_mut().extend(entering.map(|e| e.target));
        },
    );
    assert!(seen.borrow().is_empty());

    window.set_document(page());
    assert_eq!(*seen.borrow(), vec![SectionId::Hero]);

    window.scroll_to(700);
    assert!(seen.borrow().contains(&SectionId::About));
}

#[test]
fn test_scroll_is_clamped_and_only_changes_emit() {
    let window = Window::new(100, 600);
    window.set_document(page());

    let offsets = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&offsets);
    let _sub = window.on_scroll(move |event| sink.borrow_mut().push(event.offset));

    window.scroll_to(100);
    window.scroll_to(100);
    window.scroll_to(10_000);
    window.scroll_by(-50);

    assert_eq!(*offsets.borrow(), vec![100, 2600, 2550]);
}

#[test]
fn test_smooth_scroll_animates_to_target() {
    let window = Window::new(100, 600);
    window.set_document(page());

    window.smooth_scroll_to(1500);
    assert!(window.is_animating());
    assert_eq!(window.scroll_y(), 0);

    let mut steps = 0;
    while window.tick() {
        steps += 1;
        assert!(steps < 200, "animation never settles");
    }
    assert_eq!(window.scroll_y(), 1500);
    assert!(!window.is_animating());
}

#[test]
fn test_manual_scroll_cancels_animation() {
    let window = Window::new(100, 600);
    window.set_document(page());

    window.smooth_scroll_to(2000);
    window.tick();
    window.scroll_to(10);

    assert!(!window.is_animating());
    assert!(!window.tick());
    assert_eq!(window.scroll_y(), 10);
}

#[test]
fn test_shrinking_document_clamps_scroll() {
    let window = Window::new(100, 600);
    window.set_document(page());
    window.scroll_to(2600);

    window.set_document(Document::stacked(&[(SectionId::Hero, 1000)]));
    assert_eq!(window.scroll_y(), 400);
}
