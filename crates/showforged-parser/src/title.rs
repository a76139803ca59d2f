//! Episode title recovery from file names.

use crate::episode::remove_title_hint;
use crate::patterns::{BRACKETED_YEAR, TITLE_MARKERS};
use crate::stopwords::remove_stopwords;
use regex::Regex;
use showforged_common::paths;

/// Upper bound for re-running the cleaner until its output is stable.
const MAX_PASSES: usize = 8;

fn is_title_separator(c: char) -> bool {
    matches!(
        c,
        '[' | ']' | '\\' | '(' | ')' | ' ' | '_' | ',' | '.' | '-'
    )
}

/// Split on title separators and join the pieces with single spaces.
fn collapse_separators(s: &str) -> String {
    s.split(is_title_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_pass(filename: &str, title_hint: &str, bad_words: &[Regex]) -> String {
    let stripped = remove_stopwords(filename, bad_words);
    let mut basename = paths::base_name(&stripped).to_string();
    basename.push(' ');

    let basename = remove_title_hint(&basename, title_hint);
    let basename = BRACKETED_YEAR.replace(&basename, "").into_owned();

    let mut title = basename.clone();
    for re in TITLE_MARKERS.iter() {
        title = re.replace_all(&title, "").into_owned();
    }

    let cleaned = collapse_separators(&title);
    if cleaned.is_empty() {
        // everything was a marker; keep the separator-collapsed name instead
        collapse_separators(&basename)
    } else {
        cleaned
    }
}

pub(crate) fn clean_title(filename: &str, title_hint: &str, bad_words: &[Regex]) -> String {
    let mut current = clean_pass(filename, title_hint, bad_words);
    for _ in 1..MAX_PASSES {
        let next = clean_pass(&current, title_hint, bad_words);
        if next == current {
            break;
        }
        current = next;
    }
    current
}
