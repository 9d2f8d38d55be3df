use super::{ModelSlot, PageSettings, PageView};
use crate::config::Config;
use crate::scroll::Direction;
use crate::section::SectionId;
use crate::shortcuts::{KeyPress, Modifiers};
use crate::spy::TieBreak;
use crate::theme::{MemoryStorage, ThemePreference, ThemeStore};
use crate::viewport::{Document, Window};
use std::rc::Rc;
use std::sync::Arc;

fn window(width: u32) -> Rc<Window> {
    let window = Rc::new(Window::new(width, 600));
    window.set_document(Document::stacked(&[
        (SectionId::Hero, 700),
        (SectionId::About, 800),
        (SectionId::Projects, 1000),
        (SectionId::Contact, 700),
    ]));
    window
}

fn store() -> Arc<ThemeStore> {
    Arc::new(ThemeStore::load(MemoryStorage::new()))
}

#[test]
fn test_unmount_releases_every_listener() {
    let window = window(1024);
    let theme = store();
    let page = PageView::mount(&window, Arc::clone(&theme), PageSettings::default());
    assert!(window.listener_count() > 0);
    assert_eq!(theme.observer_count(), 1);

    drop(page);
    assert_eq!(window.listener_count(), 0);
    assert_eq!(theme.observer_count(), 0);

    // Events after unmount reach nobody.
    let press = window.key(KeyPress::new('t', Modifiers::ALT));
    assert!(!press.default_prevented());
    assert_eq!(theme.get(), ThemePreference::System);
}

#[test]
fn test_chrome_through_a_scroll_sequence() {
    let window = window(1024);
    let page = PageView::mount(&window, store(), PageSettings::default());

    let chrome = page.chrome();
    assert_eq!(chrome.active, Some(SectionId::Hero));
    assert!(!chrome.scrolled);
    assert!(chrome.model_mounted);

    window.scroll_to(60);
    let chrome = page.chrome();
    assert!(chrome.scrolled);
    assert_eq!(chrome.direction, Direction::Down);

    window.scroll_to(250);
    assert!(page.chrome().header_hidden);

    window.scroll_to(100);
    let chrome = page.chrome();
    assert_eq!(chrome.direction, Direction::Up);
    assert!(!chrome.header_hidden);

    window.scroll_to(2600);
    let chrome = page.chrome();
    assert_eq!(chrome.active, Some(SectionId::Contact));
    assert!(chrome.scroll_to_top);
    assert!(!chrome.model_mounted);
    assert!((chrome.progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_open_menu_keeps_header_visible() {
    let window = window(400);
    let page = PageView::mount(&window, store(), PageSettings::default());
    assert!(page.is_mobile());

    assert!(page.toggle_menu());
    window.scroll_to(250);
    let chrome = page.chrome();
    assert!(chrome.overlay_open);
    assert!(!chrome.header_hidden);

    // Navigating from the menu closes it.
    assert!(page.navigate_to(SectionId::About));
    assert!(!page.chrome().overlay_open);
}

#[test]
fn test_menu_only_exists_in_mobile_layout() {
    let window = window(400);
    let page = PageView::mount(&window, store(), PageSettings::default());
    page.toggle_menu();
    assert!(page.chrome().overlay_open);

    window.resize(1200, 600);
    let chrome = page.chrome();
    assert!(!chrome.mobile);
    assert!(!chrome.overlay_open);
    assert!(!page.toggle_menu());
}

#[test]
fn test_theme_changes_reach_chrome() {
    let window = window(1024);
    let theme = store();
    let page = PageView::mount(&window, Arc::clone(&theme), PageSettings::default());

    window.key(KeyPress::new('t', Modifiers::ALT));
    assert_eq!(page.chrome().theme, ThemePreference::Light);

    theme.set(ThemePreference::Dark);
    assert_eq!(page.chrome().theme, ThemePreference::Dark);
    assert_eq!(page.cycle_theme(), ThemePreference::System);
    assert_eq!(page.chrome().theme, ThemePreference::System);
}

#[test]
fn test_scroll_to_top_animates_home() {
    let window = window(1024);
    // Animation frames can carry hero and about crossings together; pick by visible ratio.
    let settings = PageSettings {
        tie_break: TieBreak::GreatestRatio,
        ..PageSettings::default()
    };
    let page = PageView::mount(&window, store(), settings);
    window.scroll_to(2000);

    page.scroll_to_top();
    while window.tick() {}
    assert_eq!(window.scroll_y(), 0);
    assert_eq!(page.chrome().active, Some(SectionId::Hero));
}

#[test]
fn test_moving_spy_offset_resubscribes() {
    let window = window(1024);
    let mut page = PageView::mount(&window, store(), PageSettings::default());
    let before = window.listener_count();

    page.set_spy_offset(40);
    assert_eq!(window.listener_count(), before);
    assert_eq!(page.settings().spy_offset, 40);
}

#[test]
fn test_settings_from_config() {
    let cfg = Config {
        spy_offset: 64,
        mobile_breakpoint: 100,
        shortcut_modifier: "ctrl".to_string(),
        ..Config::default()
    };
    let settings = PageSettings::from(&cfg);
    assert_eq!(settings.spy_offset, 64);
    assert_eq!(settings.mobile_breakpoint, 100);
    assert_eq!(settings.modifier, crate::shortcuts::Modifier::Ctrl);
}

#[test]
fn test_model_scale_by_layout() {
    assert!(ModelSlot::scale(true) < ModelSlot::scale(false));
}
