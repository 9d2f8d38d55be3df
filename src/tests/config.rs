use super::Config;
use crate::shortcuts::Modifier;
use crate::spy::TieBreak;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file_matches_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_partial_file_overrides_some_keys() {
    let cfg = Config::parse("spy_offset = 64\nshortcut_modifier = \"ctrl\"\n").unwrap();
    assert_eq!(cfg.spy_offset, 64);
    assert_eq!(cfg.modifier(), Modifier::Ctrl);
    assert_eq!(cfg.hide_threshold, 200);
    assert_eq!(cfg.tie_break(), TieBreak::LatestEntry);
}

#[test]
fn test_unknown_names_fall_back() {
    let cfg = Config {
        shortcut_modifier: "hyper".to_string(),
        tie_break: "random".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.modifier(), Modifier::Alt);
    assert_eq!(cfg.tie_break(), TieBreak::LatestEntry);
}

#[test]
fn test_thresholds_come_from_config() {
    let cfg = Config {
        scrolled_threshold: 10,
        hide_threshold: 20,
        scroll_top_threshold: 30,
        ..Config::default()
    };
    let thresholds = cfg.thresholds();
    assert_eq!(
        (thresholds.scrolled, thresholds.hide, thresholds.scroll_top),
        (10, 20, 30)
    );
}

#[test]
fn test_load_ignores_missing_and_invalid_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert_eq!(Config::load(Some(&missing)), Config::default());

    let invalid = dir.path().join("bad.toml");
    fs::write(&invalid, "spy_offset = \"far\"").unwrap();
    assert!(Config::load_from(&invalid).is_err());
    assert_eq!(Config::load(Some(&invalid)), Config::default());

    let good = dir.path().join("folio.toml");
    fs::write(&good, "row_height = 20\ntie_break = \"ratio\"\n").unwrap();
    let cfg = Config::load(Some(&good));
    assert_eq!(cfg.row_height, 20);
    assert_eq!(cfg.tie_break(), TieBreak::GreatestRatio);
}
