use super::{progress, ChromeThresholds, Direction, ScrollSample, ScrollTracker};
use crate::section::SectionId;
use crate::viewport::{Document, Window};
use proptest::prelude::*;

#[test]
fn test_chrome_flags_follow_offsets() {
    let thresholds = ChromeThresholds::default();
    let start = ScrollSample::default();

    let second = start.advance(60);
    assert_eq!(second.direction, Direction::Down);
    assert!(second.is_scrolled(&thresholds));
    assert!(!second.header_hidden(&thresholds, false));

    let third = second.advance(250);
    assert_eq!(third.direction, Direction::Down);
    assert!(third.header_hidden(&thresholds, false));
    assert!(!third.header_hidden(&thresholds, true));

    let fourth = third.advance(100);
    assert_eq!(fourth.direction, Direction::Up);
    assert!(!fourth.header_hidden(&thresholds, false));
    assert!(fourth.is_scrolled(&thresholds));
}

#[test]
fn test_equal_offset_keeps_direction() {
    let sample = ScrollSample::default().advance(300).advance(300);
    assert_eq!(sample.direction, Direction::Down);
    assert_eq!(ScrollSample::default().advance(0).direction, Direction::None);
}

#[test]
fn test_scroll_to_top_threshold() {
    let thresholds = ChromeThresholds::default();
    assert!(!ScrollSample::default().advance(300).shows_scroll_to_top(&thresholds));
    assert!(ScrollSample::default().advance(301).shows_scroll_to_top(&thresholds));
}

#[test]
fn test_progress_is_clamped() {
    assert!((progress(0, 2000, 500) - 0.0).abs() < f64::EPSILON);
    assert!((progress(750, 2000, 500) - 0.5).abs() < f64::EPSILON);
    assert!((progress(5000, 2000, 500) - 1.0).abs() < f64::EPSILON);
    assert!((progress(10, 300, 500) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_tracker_observes_window_scrolls() {
    let window = Window::new(100, 400);
    window.set_document(Document::stacked(&[
        (SectionId::Hero, 600),
        (SectionId::About, 600),
    ]));
    let tracker = ScrollTracker::mount(&window);

    window.scroll_to(60);
    window.scroll_to(250);
    assert_eq!(
        tracker.sample(),
        ScrollSample {
            direction: Direction::Down,
            offset: 250
        }
    );

    window.scroll_to(100);
    assert_eq!(tracker.sample().direction, Direction::Up);

    drop(tracker);
    assert_eq!(window.listener_count(), 0);
}

proptest! {
    #[test]
    fn test_direction_matches_pairwise_comparison(
        offsets in prop::collection::vec(0u32..5000, 1..50)
    ) {
        let mut sample = ScrollSample::default();
        let mut previous = 0u32;
        let mut expected = Direction::None;
        for offset in offsets {
            sample = sample.advance(offset);
            if offset > previous {
                expected = Direction::Down;
            } else if offset < previous {
                expected = Direction::Up;
            }
            previous = offset;
            prop_assert_eq!(sample.direction, expected);
            prop_assert_eq!(sample.offset, offset);
        }
    }
}
