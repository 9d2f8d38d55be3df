use super::{AboutTab, Category, Gallery, ProjectFilter, COLLAPSED_COUNT, PROJECTS};

#[test]
fn test_about_tabs_wrap() {
    assert_eq!(AboutTab::default(), AboutTab::Skills);
    let mut tab = AboutTab::Skills;
    for _ in 0..AboutTab::ALL.len() {
        tab = tab.next();
    }
    assert_eq!(tab, AboutTab::Skills);
}

#[test]
fn test_filter_preserves_table_order() {
    let mut gallery = Gallery::new();
    gallery.set_filter(ProjectFilter::Only(Category::Ai));

    let titles: Vec<&str> = gallery.filtered().iter().map(|p| p.title).collect();
    let expected: Vec<&str> = PROJECTS
        .iter()
        .filter(|p| p.category == Category::Ai)
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_collapsed_gallery_and_show_all() {
    let mut gallery = Gallery::new();
    assert_eq!(gallery.visible().len(), COLLAPSED_COUNT);
    assert!(gallery.has_more());

    gallery.show_all();
    assert_eq!(gallery.visible().len(), PROJECTS.len());
    assert!(!gallery.has_more());
}

#[test]
fn test_small_category_has_nothing_more() {
    let mut gallery = Gallery::new();
    gallery.set_filter(ProjectFilter::Only(Category::Mobile));
    assert_eq!(gallery.visible().len(), 1);
    assert!(!gallery.has_more());
}

#[test]
fn test_filter_cycle_visits_every_button() {
    let mut gallery = Gallery::new();
    let mut seen = vec![gallery.filter()];
    for _ in 1..ProjectFilter::ALL.len() {
        gallery.cycle_filter();
        seen.push(gallery.filter());
    }
    assert_eq!(seen, ProjectFilter::ALL.to_vec());
    gallery.cycle_filter();
    assert_eq!(gallery.filter(), ProjectFilter::All);
}

#[test]
fn test_dialog_opens_highlighted_card() {
    let mut gallery = Gallery::new();
    gallery.select_next();
    gallery.select_next();
    gallery.select_next();
    assert_eq!(gallery.cursor(), COLLAPSED_COUNT - 1);

    gallery.open_selected();
    assert_eq!(gallery.dialog(), Some(&PROJECTS[COLLAPSED_COUNT - 1]));

    gallery.close_dialog();
    assert_eq!(gallery.dialog(), None);
}

#[test]
fn test_changing_filter_resets_cursor() {
    let mut gallery = Gallery::new();
    gallery.select_next();
    gallery.set_filter(ProjectFilter::Only(Category::Web));
    assert_eq!(gallery.cursor(), 0);
    gallery.select_prev();
    assert_eq!(gallery.cursor(), 0);
}
