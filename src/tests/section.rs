use super::{Glyph, SectionId, BOTTOM_NAV_ITEMS, HEADER_ITEMS, SECTIONS};

#[test]
fn test_tags_round_trip_through_from_str() {
    for id in SECTIONS {
        assert_eq!(id.tag().parse::<SectionId>().unwrap(), id);
        assert_eq!(id.to_string(), id.tag());
    }
}

#[test]
fn test_unknown_tag_is_rejected() {
    let err = "footer".parse::<SectionId>().unwrap_err();
    assert_eq!(err.to_string(), "unknown section 'footer'");
}

#[test]
fn test_bottom_nav_covers_every_section_in_order() {
    let ids: Vec<SectionId> = BOTTOM_NAV_ITEMS.iter().map(|item| item.id).collect();
    assert_eq!(ids, SECTIONS.to_vec());
}

#[test]
fn test_header_skips_hero() {
    assert!(HEADER_ITEMS.iter().all(|item| item.id != SectionId::Hero));
    assert_eq!(HEADER_ITEMS[1].label, "Projects");
    assert_eq!(BOTTOM_NAV_ITEMS[2].label, "Work");
}

#[test]
fn test_every_glyph_has_a_symbol() {
    let glyphs = [
        Glyph::Home,
        Glyph::User,
        Glyph::Briefcase,
        Glyph::Mail,
        Glyph::Sun,
        Glyph::Moon,
        Glyph::Monitor,
        Glyph::Menu,
        Glyph::Close,
        Glyph::ArrowUp,
    ];
    for glyph in glyphs {
        assert!(!glyph.symbol().is_empty(), "{glyph:?} has no symbol");
    }
}
