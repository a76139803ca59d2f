//! Single character `$X` tokens of older renamer patterns.
//!
//! | Token | Named form |
//! |-------|------------|
//! | `$N` | `${showTitle}` |
//! | `$M` | `${showTitleSortable}` |
//! | `$Y` | `${showYear}` |
//! | `$1` `$2` | `${seasonNr}` `${seasonNr2}` |
//! | `$3` `$4` | `${seasonNrDvd}` `${seasonNrDvd2}` |
//! | `$E` `$D` | `${episodeNr2}` `${episodeNrDvd2}` |
//! | `$T` | `${title}` |
//! | `$S` | `${mediaSource}` |
//! | `$R` | `${videoResolution}` |
//! | `$A` | `${audioCodecChannels}` |
//! | `$V` | `${videoCodecFormat}` |
//! | `$F` | `${videoFormat}` |
//!
//! Letters are matched case-insensitively. Any other `$` followed by a
//! letter, digit, `_` or `#` is an unknown token and renders as nothing.

use std::borrow::Cow;

fn named_form(token: char) -> Option<&'static str> {
    let named = match token.to_ascii_uppercase() {
        'N' => "${showTitle}",
        'M' => "${showTitleSortable}",
        'Y' => "${showYear}",
        '1' => "${seasonNr}",
        '2' => "${seasonNr2}",
        '3' => "${seasonNrDvd}",
        '4' => "${seasonNrDvd2}",
        'E' => "${episodeNr2}",
        'D' => "${episodeNrDvd2}",
        'T' => "${title}",
        'S' => "${mediaSource}",
        'R' => "${videoResolution}",
        'A' => "${audioCodecChannels}",
        'V' => "${videoCodecFormat}",
        'F' => "${videoFormat}",
        _ => return None,
    };
    Some(named)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '#'
}

/// Translate `$X` tokens to their named form and drop unknown ones. Named
/// `${...}` tokens and a `$` not followed by a token character are left
/// alone.
///
/// ```
/// use showforged::template::translate_legacy;
///
/// assert_eq!(translate_legacy("$N - S$2E$E"), "${showTitle} - S${seasonNr2}E${episodeNr2}");
/// assert_eq!(translate_legacy("${title} $$"), "${title} $$");
/// assert_eq!(translate_legacy("$N $Z"), "${showTitle} ");
/// ```
pub fn translate_legacy(template: &str) -> Cow<'_, str> {
    let has_legacy = template
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'$' && is_token_char(w[1] as char));
    if !has_legacy {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len() * 2);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(next) = chars.peek().copied().filter(|&next| is_token_char(next)) {
                out.push_str(named_form(next).unwrap_or(""));
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}
