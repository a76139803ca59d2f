//! Fixture tests for showforged-parser.
//!
//! - `episodes.json`: file names and their expected detection in the compact
//!   `S:1 E:2 Split` form
//! - `titles.json`: file names, show titles and the expected episode title

use serde::Deserialize;
use showforged_parser::{clean_title, detect_from_relative_path};
use std::fs;

/// Title hint that never occurs in the fixtures; it also checks that regex
/// metacharacters in the show title are taken literally.
const UNUSED_TITLE: &str = "asdf[.*asdf";

#[derive(Debug, Deserialize)]
struct EpisodeCase {
    input: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct TitleCase {
    input: String,
    title_hint: String,
    expected: String,
}

fn load<T: for<'de> Deserialize<'de>>(path: &str) -> Vec<T> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("could not read {}: {}", path, e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("could not parse {}: {}", path, e))
}

#[test]
fn test_episode_fixtures() {
    let cases: Vec<EpisodeCase> = load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/episodes.json"
    ));
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let actual = detect_from_relative_path(&case.input, UNUSED_TITLE).to_string();
        if actual != case.expected {
            failures.push(format!(
                "{}\n    expected: {}\n    actual:   {}",
                case.input, case.expected, actual
            ));
        }
    }

    println!(
        "episodes.json: {}/{} passed",
        cases.len() - failures.len(),
        cases.len()
    );
    assert!(
        failures.is_empty(),
        "{} episode fixture(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_title_fixtures() {
    let cases: Vec<TitleCase> = load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/titles.json"
    ));
    assert!(!cases.is_empty());

    for case in &cases {
        let actual = clean_title(&case.input, &case.title_hint);
        assert_eq!(actual, case.expected, "clean_title({:?})", case.input);
        assert_eq!(
            clean_title(&actual, &case.title_hint),
            actual,
            "clean_title is not stable for {:?}",
            case.input
        );
    }
}

#[test]
fn test_detect_is_deterministic() {
    let cases: Vec<EpisodeCase> = load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/episodes.json"
    ));
    for case in &cases {
        assert_eq!(
            detect_from_relative_path(&case.input, UNUSED_TITLE),
            detect_from_relative_path(&case.input, UNUSED_TITLE)
        );
    }
}

#[test]
fn test_relative_path_takes_season_from_folder() {
    let result = detect_from_relative_path("Season 3/05 - Title.mkv", "");
    assert_eq!(result.to_string(), "S:3 E:5");

    let result = detect_from_relative_path("Staffel_02\\Show - E07.avi", "Show");
    assert_eq!(result.to_string(), "S:2 E:7");
}

#[test]
fn test_relative_path_falls_back_to_folder() {
    let result = detect_from_relative_path("Show S01E04/VIDEO_TS/VIDEO_TS.IFO", "Show");
    assert_eq!(result.to_string(), "S:1 E:4");
}
