//! Season/episode detection.
//!
//! Detection is an ordered cascade over the normalized file name:
//!
//! 1. season words (`Season 2`, `Staffel 3`) anywhere in folder or file name
//! 2. `S01E02` style markers, with contiguous follow-up episodes
//! 3. `1x02` style markers
//! 4. `EP05` / `Episode 5` without season
//! 5. roman parts (`Part II`)
//! 6. dates, read as "season = year"
//! 7. bare numbers (`102` = S1E2, `02` = E2, `2` = E2)
//!
//! Once step 2, 3 or 4 yields an episode the generic rules are skipped.

use crate::model::EpisodeMatchingResult;
use crate::patterns::{
    BRACKETED_YEAR, DATE_DMY, DATE_YMD, DIGIT_RUN, EPISODE, EPISODE_ONLY, NUMBERS_2, NUMBERS_3,
    ROMAN_PART, SEASON, SEASON_MULTI_EP, SEASON_MULTI_EP_X, TRAILING_EXTENSION,
};
use crate::stacking::stacking_marker;
use crate::stopwords::remove_stopwords;
use chrono::NaiveDate;
use regex::Regex;
use showforged_common::paths;
use tracing::{debug, trace};

/// Detect on the file name first and fall back to the relative path.
///
/// If the file name alone yields episodes but no season, the season is taken
/// from the whole relative path (`Season 1/04 Title.mkv`). If the file name
/// yields nothing, the whole relative path is searched instead.
pub(crate) fn detect_from_relative_path(
    relative_path: &str,
    title_hint: &str,
    bad_words: &[Regex],
    resolve_disc_files: bool,
) -> EpisodeMatchingResult {
    let mut result = detect(
        paths::file_name(relative_path),
        title_hint,
        bad_words,
        resolve_disc_files,
    );

    if result.has_episodes() && !result.has_season() {
        let from_path = detect(relative_path, title_hint, bad_words, resolve_disc_files);
        result.season = from_path.season;
    } else if !result.has_season() && !result.has_episodes() {
        result = detect(relative_path, title_hint, bad_words, resolve_disc_files);
    }

    result
}

pub(crate) fn detect(
    name: &str,
    title_hint: &str,
    bad_words: &[Regex],
    resolve_disc_files: bool,
) -> EpisodeMatchingResult {
    debug!(name, "parsing episode file name");
    let mut result = EpisodeMatchingResult::default();

    let file_name = paths::file_name(name);

    // disc structure files carry no information, their folders do
    let search = if resolve_disc_files && paths::is_disc_file(file_name) {
        &name[..name.len() - file_name.len()]
    } else {
        name
    };

    let normalized = remove_stopwords(search, bad_words);
    let (folder, basename) = split_folder(&normalized);
    if folder.is_empty() && basename.is_empty() {
        return result;
    }

    let mut basename = remove_title_hint(basename, title_hint);
    basename = TRAILING_EXTENSION.replace(&basename, "").into_owned();
    basename = BRACKETED_YEAR.replace(&basename, "").into_owned();
    basename.push(' ');

    result.stacking_marker_found = !stacking_marker(file_name).is_empty();
    result.name = basename.trim().to_string();

    let haystack = format!("{}{}", folder, basename);

    if let Some(caps) = SEASON.captures(&haystack) {
        if let Ok(season) = caps[2].parse::<i32>() {
            trace!(season, "add found season");
            result.season = season;
        }
    }

    // S01E02, S01E02E03, S01E02 S01E03: follow-up episodes must be contiguous
    let mut last_found = 0;
    for caps in SEASON_MULTI_EP.captures_iter(&haystack) {
        for ep in EPISODE.captures_iter(&caps[2]) {
            let ep: i32 = ep[1].parse().unwrap_or(0);
            if (last_found == 0 || last_found + 1 == ep) && result.add_episode(ep) {
                last_found = ep;
            }
        }
        if let Ok(season) = caps[1].parse::<i32>() {
            trace!(season, "add found season");
            result.season = season;
        }
    }

    // 1x02, 1x02x03
    for caps in SEASON_MULTI_EP_X.captures_iter(&haystack) {
        let season = if result.has_season() {
            None
        } else {
            caps[1].parse::<i32>().ok()
        };
        for ep in EPISODE.captures_iter(&caps[2]) {
            result.add_episode(ep[1].parse().unwrap_or(0));
        }
        if let Some(season) = season {
            trace!(season, "add found season");
            result.season = season;
        }
    }

    if !result.has_episodes() {
        for caps in EPISODE_ONLY.captures_iter(&basename) {
            result.add_episode(caps[1].parse().unwrap_or(0));
        }
    }

    if result.has_episodes() {
        return post_clean(result);
    }

    for caps in ROMAN_PART.captures_iter(&basename) {
        result.add_episode(decode_roman(&caps[2]));
    }

    if !result.has_season() {
        if let Some(caps) = DATE_YMD.captures(&basename) {
            return with_date(result, &caps[1], &caps[2], &caps[3]);
        }
        if let Some(caps) = DATE_DMY.captures(&basename) {
            return with_date(result, &caps[3], &caps[2], &caps[1]);
        }
    }

    let numbers: Vec<&str> = DIGIT_RUN
        .find_iter(&basename)
        .map(|m| m.as_str())
        .collect();

    // every three digit number is read as SEE
    for num in numbers.iter().filter(|n| n.len() == 3) {
        let (season, episode) = num.split_at(1);
        result.add_episode(episode.parse().unwrap_or(0));
        if let Ok(season) = season.parse::<i32>() {
            trace!(season, "add found season");
            result.season = season;
        }
    }
    if result.has_episodes() {
        return post_clean(result);
    }

    // otherwise the first two digit number, then the first single digit
    for len in [2, 1] {
        if let Some(num) = numbers.iter().find(|n| n.len() == len) {
            result.add_episode(num.parse().unwrap_or(0));
            return post_clean(result);
        }
    }

    post_clean(result)
}

fn with_date(
    mut result: EpisodeMatchingResult,
    year: &str,
    month: &str,
    day: &str,
) -> EpisodeMatchingResult {
    let year: i32 = year.parse().unwrap_or(-1);
    result.season = year;
    result.date = match (month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };
    trace!(season = year, date = ?result.date, "add found year as season");
    post_clean(result)
}

fn post_clean(mut result: EpisodeMatchingResult) -> EpisodeMatchingResult {
    let mut cleaned = result.name.clone();
    for re in [
        &*SEASON,
        &*SEASON_MULTI_EP,
        &*SEASON_MULTI_EP_X,
        &*EPISODE,
        &*EPISODE_ONLY,
        &*NUMBERS_3,
        &*NUMBERS_2,
        &*ROMAN_PART,
        &*DATE_YMD,
        &*DATE_DMY,
    ] {
        cleaned = re.replace(&cleaned, "").into_owned();
    }
    result.cleaned_name = cleaned
        .trim_matches(|c| matches!(c, ' ' | '.' | '-' | '_'))
        .to_string();

    result.episodes.sort_unstable();
    debug!(result = %result, cleaned = %result.cleaned_name, "detected episode");
    result
}

/// Split at the last path separator; the folder keeps its trailing separator.
pub(crate) fn split_folder(name: &str) -> (&str, &str) {
    match name.rfind(['/', '\\']) {
        Some(idx) => name.split_at(idx + 1),
        None => ("", name),
    }
}

/// Remove the title hint at the start of `name` and wherever it stands
/// between two spaces. Matching ignores ASCII case.
pub(crate) fn remove_title_hint(name: &str, hint: &str) -> String {
    let hint = hint.as_bytes();
    if hint.is_empty() {
        return name.to_string();
    }

    let mut rest = name;
    if rest.len() >= hint.len() && rest.as_bytes()[..hint.len()].eq_ignore_ascii_case(hint) {
        rest = &rest[hint.len()..];
    }

    let needle_len = hint.len() + 2;
    let matches_at = |s: &[u8], i: usize| {
        s.len() >= i + needle_len
            && s[i] == b' '
            && s[i + needle_len - 1] == b' '
            && s[i + 1..i + needle_len - 1].eq_ignore_ascii_case(hint)
    };

    let bytes = rest.as_bytes();
    let mut out = String::with_capacity(rest.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if matches_at(bytes, i) {
            out.push_str(&rest[start..i]);
            out.push(' ');
            i += needle_len;
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&rest[start..]);
    out
}

fn roman_value(letter: char) -> i32 {
    match letter {
        'M' => 1000,
        'D' => 500,
        'C' => 100,
        'L' => 50,
        'X' => 10,
        'V' => 5,
        'I' => 1,
        _ => 0,
    }
}

/// Decode a roman numeral, ignoring case. Unknown letters count as 0.
///
/// ```
/// use showforged_parser::decode_roman;
///
/// assert_eq!(decode_roman("II"), 2);
/// assert_eq!(decode_roman("iv"), 4);
/// assert_eq!(decode_roman("MCMXCIV"), 1994);
/// ```
pub fn decode_roman(roman: &str) -> i32 {
    let values: Vec<i32> = roman
        .chars()
        .map(|c| roman_value(c.to_ascii_uppercase()))
        .collect();

    let mut total = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if value < next => total -= value,
            _ => total += value,
        }
    }
    total
}
