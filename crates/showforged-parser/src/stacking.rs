//! Stacking markers for episodes split over several files.
//!
//! A stacked episode is stored as `Show.S01E01.CD1.avi`, `Show.S01E01.CD2.avi`
//! (or `part1`, `pt.2`, `disc a`, `-b`, `1of2`, ...). The marker never carries
//! an episode number; it identifies the part and is kept verbatim when the
//! episode is renamed.
//!
//! ```
//! use showforged_parser::stacking::{clean_stacking_markers, stacking_marker, stacking_number};
//!
//! assert_eq!(stacking_marker("Show.S01E01.part2.mkv"), "part2");
//! assert_eq!(stacking_number("Show.S01E01.part2.mkv"), 2);
//! assert_eq!(clean_stacking_markers("Show.S01E01.part2.mkv"), "Show.S01E01.mkv");
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `<cd|dvd|part|pt|disc|disk> <1-9>`
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ _.-]+((?:cd|dvd|p(?:ar)?t|dis[ck])[ _.-]*[1-9])(\.[^.]+)$")
        .expect("valid stacking regex")
});

/// `<cd|dvd|part|pt|disc|disk> <a-d>`
static LETTERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ _.-]+((?:cd|dvd|p(?:ar)?t|dis[ck])[ _.-]*[a-d])(\.[^.]+)$")
        .expect("valid stacking regex")
});

/// `name-a.avi`; the delimiter is mandatory and the letter must end the name.
static BARE_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[_.-]+([a-d])(\.[^.]+)$").expect("valid stacking regex")
});

/// `name-1of2.avi`, `name (1 of 2).avi`
static X_OF_Y: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ (_.-]+([1-9][ .]?of[ .]?[1-9])[ )_-]?(\.[^.]+)$")
        .expect("valid stacking regex")
});

/// Stacking marker on a folder name (`Show.S01E01.CD1/VIDEO_TS`).
static FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ _.-]*((?:cd|dvd|p(?:ar)?t|dis[ck])[ _.-]*[1-9])$")
        .expect("valid stacking regex")
});

fn file_patterns() -> [&'static Regex; 4] {
    [&*NUMBERED, &*LETTERED, &*BARE_LETTER, &*X_OF_Y]
}

fn match_file(filename: &str) -> Option<Captures<'_>> {
    if filename.is_empty() {
        return None;
    }
    file_patterns()
        .into_iter()
        .find_map(|re| re.captures(filename))
}

/// Return the stacking marker of a file name (with extension), or `""`.
///
/// A bare trailing number (`name-1.avi`, `name.ep01.1.avi`) is never a
/// marker; it is too often a sequel or an episode number.
pub fn stacking_marker(filename: &str) -> &str {
    match_file(filename)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Return the file name with its stacking marker removed, or the input
/// unchanged when it has none.
pub fn clean_stacking_markers(filename: &str) -> String {
    match match_file(filename) {
        Some(caps) => format!("{}{}", &caps[1], &caps[3]),
        None => filename.to_string(),
    }
}

/// Return the stacking marker of a folder name (`Show.S01E01.CD1`), or `""`.
///
/// Disc episodes split over several folders keep this marker when the
/// folders are renamed.
pub fn folder_stacking_marker(folder: &str) -> &str {
    FOLDER
        .captures(folder)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Return the part number encoded in the stacking marker, or 0.
///
/// Letters map to `a=1 .. d=4`; `XofY` yields `X`.
pub fn stacking_number(filename: &str) -> u32 {
    let marker = stacking_marker(filename);
    if marker.is_empty() {
        return 0;
    }

    match marker.to_ascii_lowercase().as_str() {
        "a" => return 1,
        "b" => return 2,
        "c" => return 3,
        "d" => return 4,
        _ => {}
    }

    let numbered = match marker.find("of") {
        Some(idx) => &marker[..idx],
        None => marker,
    };
    let digits: String = numbered.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
