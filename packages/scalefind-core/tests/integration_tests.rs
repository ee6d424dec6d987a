//! Integration tests for the scale finder
//!
//! Tests the full pipeline from a catalog document and raw query text to pages,
//! rendered output and preview schedules.

use std::sync::Arc;

use scalefind::audio::PlaybackMode;
use scalefind::{
    find_scales, preview, render_results_html, search, Catalog, QueryOutcome, ScaleError,
    SearchSession, Settings, SortMethod,
};

const CATALOG: &str = r#"{
    "A": { "notes": ["1/1", "3/2"] },
    "B": { "notes": ["1/1", "5/4"] }
}"#;

const RICH_CATALOG: &str = r#"{
    "Just Major": {
        "notes": ["1/1", "9/8", "5/4", "4/3", "3/2", "5/3", "15/8"],
        "jpname": "純正長音階",
        "aliases": ["Ptolemaic Diatonic"],
        "dimension": "3D",
        "related": ["Pythagorean Major", "Just Minor"],
        "deta": ["1/1", "9/8", "5/4", "4/3", "3/2", "5/3", "15/8", "2/1"]
    },
    "Just Minor": {
        "notes": ["1/1", "9/8", "6/5", "4/3", "3/2", "8/5", "9/5"],
        "dimension": "3D",
        "related": ["Just Major"]
    },
    "Pythagorean Major": {
        "notes": ["1/1", "9/8", "81/64", "4/3", "3/2", "27/16", "243/128"],
        "dimension": "2D",
        "related": ["Pythagorean Pentatonic", "Just Major", "Lost Scale"]
    },
    "Pythagorean Pentatonic": {
        "notes": ["1/1", "9/8", "81/64", "3/2", "27/16"],
        "dimension": "2D"
    },
    "Harmonic Series 8-16": {
        "notes": ["1/1", "9/8", "5/4", "11/8", "3/2", "13/8", "7/4", "15/8"],
        "dimension": "6D"
    }
}"#;

#[test]
fn test_two_scale_scenario() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    assert_eq!(find_scales(&catalog, &["3/2"]), vec!["A"]);
    assert_eq!(search(&catalog, "1/1", SortMethod::Name), vec!["A", "B"]);
}

#[test]
fn test_no_valid_query_is_empty() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let empty: [&str; 0] = [];
    assert!(find_scales(&catalog, &empty).is_empty());
    assert!(find_scales(&catalog, &["abc"]).is_empty());
}

#[test]
fn test_sort_methods_on_rich_catalog() {
    let catalog = Catalog::from_json(RICH_CATALOG).unwrap();

    assert_eq!(
        search(&catalog, "9/8", SortMethod::Length),
        vec![
            "Pythagorean Pentatonic",
            "Just Major",
            "Just Minor",
            "Pythagorean Major",
            "Harmonic Series 8-16",
        ]
    );
    assert_eq!(
        search(&catalog, "9/8", SortMethod::Dimension),
        vec![
            "Pythagorean Major",
            "Pythagorean Pentatonic",
            "Just Major",
            "Just Minor",
            "Harmonic Series 8-16",
        ]
    );
    assert_eq!(
        search(&catalog, "9/8", SortMethod::Related),
        vec![
            "Pythagorean Major",
            "Just Major",
            "Just Minor",
            "Harmonic Series 8-16",
            "Pythagorean Pentatonic",
        ]
    );
}

#[test]
fn test_substring_matching_is_permissive() {
    let catalog = Catalog::from_json(RICH_CATALOG).unwrap();
    // "3" is inside 4/3, 3/2, 5/3, 13/8 ...; "8" is inside 9/8 everywhere
    assert_eq!(search(&catalog, "3 8", SortMethod::Name).len(), 5);
    assert_eq!(
        search(&catalog, "11", SortMethod::Name),
        vec!["Harmonic Series 8-16"]
    );
}

#[test]
fn test_session_click_through_and_dangling_link() {
    let catalog = Arc::new(Catalog::from_json(RICH_CATALOG).unwrap());
    let mut session = SearchSession::new(catalog.clone());

    assert_eq!(session.set_query("81/64"), QueryOutcome::Results);
    let html = render_results_html(&session);
    assert!(html.contains("data-scale=\"Lost Scale\""));

    assert!(!session.follow_related("Lost Scale"));
    assert_eq!(session.query(), "81/64");

    assert!(session.follow_related("Just Minor"));
    assert_eq!(session.query(), "1/1 9/8 6/5 4/3 3/2 8/5 9/5");
    assert_eq!(session.page_items(), &["Just Minor"]);
    assert_eq!(session.page_indicator(), "1 / 1");

    assert_eq!(catalog.dangling_related(), vec![("Pythagorean Major", "Lost Scale")]);
}

#[test]
fn test_failed_catalog_load_yields_no_results() {
    let catalog = Arc::new(Catalog::from_json_or_empty("<html>404</html>"));
    let mut session = SearchSession::new(catalog);
    assert_eq!(session.set_query("1/1"), QueryOutcome::NoMatches);
    assert_eq!(session.page_indicator(), "0 / 0");
}

#[test]
fn test_preview_uses_ratios() {
    let catalog = Catalog::from_json(RICH_CATALOG).unwrap();
    let settings = Settings::default();

    let data = preview(&catalog, "Just Major", PlaybackMode::Arpeggio, Some("200"), &settings).unwrap();
    assert_eq!(data.tones.len(), 8);
    assert_eq!(data.tones[0].frequency, 200.0);
    assert_eq!(data.tones[7].frequency, 400.0);
    assert_eq!(data.tones[7].start_time, 1.75);

    let silent = preview(&catalog, "Just Minor", PlaybackMode::Chord, None, &settings).unwrap();
    assert!(silent.tones.is_empty());

    let missing = preview(&catalog, "Nope", PlaybackMode::Chord, None, &settings);
    assert!(matches!(missing, Err(ScaleError::UnknownScale(_))));
}
