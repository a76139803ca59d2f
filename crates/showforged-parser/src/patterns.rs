//! Compiled regular expressions shared by the detector and the title cleaner.
//!
//! All patterns are compiled once on first use. Character classes are spelled
//! out as ASCII (`[0-9]`, `[A-Za-z0-9_]`) so that accented letters in episode
//! titles count as separators, the same way release tools treat them.

use regex::Regex;
use std::sync::LazyLock;

/// `2011-04-17` / `2011.04.17`
pub(crate) static DATE_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{4})[.-]([0-9]{2})[.-]([0-9]{2})").expect("valid date regex")
});

/// `17-04-2011` / `17.04.2011`
pub(crate) static DATE_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{2})[.-]([0-9]{2})[.-]([0-9]{4})").expect("valid date regex")
});

/// `Season 2`, `staffel_02`, `Series.5`
pub(crate) static SEASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(staffel|season|series)[\s_.-]*([0-9]{1,4})").expect("valid season regex")
});

/// Single episode number inside an episode group (`e02`, `x03`, `-04`).
pub(crate) static EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[epx_-]+([0-9]{1,3})").expect("valid episode regex")
});

/// Episode without season (`EP05`, `ep_05`, `Episode 11`).
pub(crate) static EPISODE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:episode|ep)[. _-]*([0-9]{1,3})").expect("valid episode regex")
});

/// `part II`, `pt.IV`
pub(crate) static ROMAN_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(part|pt)[._\s]+([MDCLXVI]+)").expect("valid roman regex")
});

/// `S01E02`, `s01.e02`, `S03 EP05`, `s01e01-02-03`
pub(crate) static SEASON_MULTI_EP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)s([0-9]{1,4}) ?((?:[epx_.-]+[0-9]{1,3})+)").expect("valid multi-ep regex")
});

/// `1x02`, `1x02x03`, `1960x05`
pub(crate) static SEASON_MULTI_EP_X: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,4})(x[epx]*[0-9]{1,3}(?:[epx]+[0-9]{1,3})*)")
        .expect("valid multi-ep regex")
});

pub(crate) static NUMBERS_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})").expect("valid number regex"));

pub(crate) static NUMBERS_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([0-9]{2})").expect("valid number regex"));

pub(crate) static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number regex"));

/// Trailing extension of one to four word characters.
pub(crate) static TRAILING_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z0-9_]{1,4}$").expect("valid extension regex"));

/// `(2001)` or `[2001]`
pub(crate) static BRACKETED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[][0-9]{4}[)\]]").expect("valid year regex"));

/// `1920x1080` preceded by a separator.
pub(crate) static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^A-Za-z0-9_][0-9]{3,4}x[0-9]{3,4}").expect("valid resolution regex")
});

/// Marker variants removed from episode titles, applied in order.
///
/// Case sensitive: `S01E02` style markers list both cases explicitly, the
/// rest only match lower case.
pub(crate) static TITLE_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[Ss]([0-9]+)[\]\[ _.-]*[Ee]([0-9]+)",
        r"[ _.-][Ee][Pp]?_?([0-9]+)",
        r"([0-9]{4})[.-]([0-9]{2})[.-]([0-9]{2})",
        r"([0-9]{2})[.-]([0-9]{2})[.-]([0-9]{4})",
        r"[\\/._ \[(-]([0-9]+)x([0-9]+)",
        r"[/ _.-]p(?:ar)?t[ _.-]([ivx]+)",
        r"[epx_-]+([0-9]{1,3})",
        r"episode[. _-]*([0-9]{1,3})",
        r"(part|pt)[._\s]+([MDCLXVI]+)",
        r"(staffel|season|series)[\s_.-]*([0-9]{1,4})",
        r"s([0-9]{1,4}) ?((?:[epx_.-]+[0-9]{1,3})+)",
        r"([0-9]{1,4})(x[epx]*[0-9]{1,3}(?:[epx]+[0-9]{1,3})*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid title marker regex"))
    .collect()
});
