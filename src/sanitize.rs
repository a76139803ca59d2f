//! Clean-up of rendered names.
//!
//! Token values are stripped of characters that are illegal in file names
//! as they are substituted ([`clean_token_value`]); the assembled name then
//! goes through [`finish_name`].

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").expect("valid regex"));

static MULTIPLE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\]{2,}").expect("valid regex"));

static MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

static TRAILING_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ .]+$").expect("valid regex"));

/// Characters removed from substituted token values.
const TOKEN_ILLEGAL: &[char] = &['"', ':', '<', '>', '|', '/', '?', '*'];

/// Characters not allowed in a file or folder name.
const NAME_ILLEGAL: &[char] = &['"', '\\', ':', '<', '>', '|', '/', '?', '*'];

/// Strip characters that would break a path out of a token value.
///
/// ```
/// use showforged::sanitize::clean_token_value;
///
/// assert_eq!(clean_token_value("Who? What: Why/How"), "Who What WhyHow");
/// ```
pub fn clean_token_value(value: &str) -> String {
    value.chars().filter(|c| !TOKEN_ILLEGAL.contains(c)).collect()
}

/// Make a single name component legal: colons become dashes, the remaining
/// illegal characters are dropped.
///
/// ```
/// use showforged::sanitize::replace_invalid_characters;
///
/// assert_eq!(replace_invalid_characters("Star Trek: Picard"), "Star Trek - Picard");
/// assert_eq!(replace_invalid_characters("10:30 <live>"), "10-30 live");
/// ```
pub fn replace_invalid_characters(name: &str) -> String {
    name.replace(": ", " - ")
        .replace(':', "-")
        .chars()
        .filter(|c| !NAME_ILLEGAL.contains(c))
        .collect()
}

/// Transliterate to ASCII.
///
/// German umlauts and a few ligatures get their conventional spelling,
/// everything else is decomposed and stripped of non-ASCII marks.
pub fn to_ascii(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    for c in text.chars() {
        let replacement = match c {
            'ä' => "ae",
            'ö' => "oe",
            'ü' => "ue",
            'Ä' => "Ae",
            'Ö' => "Oe",
            'Ü' => "Ue",
            'ß' => "ss",
            'æ' => "ae",
            'Æ' => "AE",
            'œ' => "oe",
            'Œ' => "OE",
            'ø' => "o",
            'Ø' => "O",
            'đ' => "d",
            'Đ' => "D",
            'ł' => "l",
            'Ł' => "L",
            'þ' => "th",
            'Þ' => "Th",
            _ => {
                expanded.push(c);
                continue;
            }
        };
        expanded.push_str(replacement);
    }

    expanded.nfkd().filter(char::is_ascii).collect()
}

/// Final clean-up of a rendered name or relative path.
///
/// Drops empty `()`/`[]`, collapses doubled separators and strips a leading
/// one, optionally transliterates to ASCII, collapses spaces, optionally
/// replaces spaces, and strips trailing dots and spaces.
///
/// ```
/// use showforged::sanitize::finish_name;
///
/// assert_eq!(finish_name("Show () //Season 1.", false, None), "Show /Season 1");
/// assert_eq!(finish_name("Die Bärenbande", true, Some(".")), "Die.Baerenbande");
/// ```
pub fn finish_name(name: &str, ascii: bool, space_replacement: Option<&str>) -> String {
    let name = EMPTY_BRACKETS.replace_all(name, "");
    let name = MULTIPLE_SEPARATORS.replace_all(&name, "/");
    let name = name.trim_start_matches(['/', '\\']);

    let name = if ascii {
        to_ascii(name)
    } else {
        name.to_string()
    };

    let name = MULTIPLE_SPACES.replace_all(name.trim(), " ");
    let name = match space_replacement {
        Some(replacement) => name.replace(' ', replacement),
        None => name.into_owned(),
    };

    TRAILING_DOTS.replace(&name, "").trim().to_string()
}
