use super::{pick_active, TieBreak, VisibilityTracker};
use crate::section::{SectionId, SECTIONS};
use crate::viewport::{Document, IntersectionEntry, Window};
use proptest::prelude::*;

fn entry(target: SectionId, is_intersecting: bool, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        target,
        is_intersecting,
        ratio,
    }
}

fn mounted_window() -> Window {
    let window = Window::new(120, 600);
    window.set_document(Document::stacked(&[
        (SectionId::Hero, 700),
        (SectionId::About, 800),
        (SectionId::Projects, 1000),
        (SectionId::Contact, 700),
    ]));
    window
}

#[test]
fn test_enter_sequence_last_write_wins() {
    // about enters, projects enters, about enters again
    let batches = [
        vec![entry(SectionId::About, true, 0.25)],
        vec![entry(SectionId::Projects, true, 0.5)],
        vec![entry(SectionId::About, true, 0.25)],
    ];
    let mut active = None;
    for batch in &batches {
        if let Some(id) = pick_active(batch, TieBreak::LatestEntry) {
            active = Some(id);
        }
    }
    assert_eq!(active, Some(SectionId::About));
}

#[test]
fn test_exits_do_not_clear() {
    let batch = [entry(SectionId::Hero, false, 0.0)];
    assert_eq!(pick_active(&batch, TieBreak::LatestEntry), None);
}

#[test]
fn test_greatest_ratio_tie_break() {
    let batch = [
        entry(SectionId::About, true, 0.75),
        entry(SectionId::Projects, true, 0.25),
        entry(SectionId::Contact, false, 0.0),
    ];
    assert_eq!(
        pick_active(&batch, TieBreak::LatestEntry),
        Some(SectionId::Projects)
    );
    assert_eq!(
        pick_active(&batch, TieBreak::GreatestRatio),
        Some(SectionId::About)
    );

    let even = [
        entry(SectionId::About, true, 0.5),
        entry(SectionId::Projects, true, 0.5),
    ];
    assert_eq!(
        pick_active(&even, TieBreak::GreatestRatio),
        Some(SectionId::Projects)
    );
}

#[test]
fn test_tie_break_parses_config_tags() {
    assert_eq!("latest".parse::<TieBreak>().unwrap(), TieBreak::LatestEntry);
    assert_eq!("ratio".parse::<TieBreak>().unwrap(), TieBreak::GreatestRatio);
    assert!("first".parse::<TieBreak>().is_err());
}

#[test]
fn test_tracker_follows_scrolling() {
    let window = mounted_window();
    let tracker = VisibilityTracker::mount(&window, &SECTIONS, 80, TieBreak::LatestEntry);
    assert_eq!(tracker.active(), Some(SectionId::Hero));

    window.scroll_to(1600);
    assert_eq!(tracker.active(), Some(SectionId::Projects));

    // Scrolling back up re-enters about.
    window.scroll_to(900);
    assert_eq!(tracker.active(), Some(SectionId::About));
}

#[test]
fn test_tracker_starts_empty_without_regions() {
    let window = Window::new(120, 600);
    let tracker = VisibilityTracker::mount(&window, &SECTIONS, 80, TieBreak::LatestEntry);
    assert_eq!(tracker.active(), None);
    assert_eq!(window.listener_count(), 1);
}

#[test]
fn test_retarget_resubscribes_and_drop_releases() {
    let window = mounted_window();
    let mut tracker = VisibilityTracker::mount(&window, &SECTIONS, 80, TieBreak::LatestEntry);
    assert_eq!(window.listener_count(), 1);

    tracker.retarget(&window, &[SectionId::Contact], 40);
    assert_eq!(window.listener_count(), 1);
    assert_eq!(tracker.sections(), &[SectionId::Contact]);
    assert_eq!(tracker.offset(), 40);
    // Still hero: nothing new has entered.
    assert_eq!(tracker.active(), Some(SectionId::Hero));

    window.scroll_to(1200);
    assert_eq!(tracker.active(), Some(SectionId::Hero));
    window.scroll_to(2600);
    assert_eq!(tracker.active(), Some(SectionId::Contact));

    drop(tracker);
    assert_eq!(window.listener_count(), 0);
}

fn section_strategy() -> impl Strategy<Value = SectionId> {
    prop_oneof![
        Just(SectionId::Hero),
        Just(SectionId::About),
        Just(SectionId::Projects),
        Just(SectionId::Contact),
    ]
}

proptest! {
    #[test]
    fn test_active_is_last_reported_intersection(
        reports in prop::collection::vec((section_strategy(), any::<bool>()), 0..40)
    ) {
        let mut active = None;
        for (target, is_intersecting) in &reports {
            let batch = [entry(*target, *is_intersecting, 0.5)];
            if let Some(id) = pick_active(&batch, TieBreak::LatestEntry) {
                active = Some(id);
            }
        }
        let expected = reports
            .iter()
            .rev()
            .find(|(_, is_intersecting)| *is_intersecting)
            .map(|(target, _)| *target);
        prop_assert_eq!(active, expected);
    }
}
