//! Language tags in external subtitle file names.
//!
//! Subtitles sit next to the video as `<video base>.<lang>[.forced].<ext>`
//! (`Show.S01E01.de.forced.srt`). The tag may be an ISO 639-1 or 639-2 code
//! or an English or native language name.

use phf::phf_map;

/// Known language tags, mapped to their ISO 639-1 code.
static LANGUAGE_TAGS: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => "en", "eng" => "en", "english" => "en",
    "de" => "de", "deu" => "de", "ger" => "de", "german" => "de", "deutsch" => "de",
    "fr" => "fr", "fra" => "fr", "fre" => "fr", "french" => "fr", "francais" => "fr",
    "es" => "es", "spa" => "es", "spanish" => "es", "espanol" => "es",
    "it" => "it", "ita" => "it", "italian" => "it", "italiano" => "it",
    "nl" => "nl", "nld" => "nl", "dut" => "nl", "dutch" => "nl",
    "pt" => "pt", "por" => "pt", "portuguese" => "pt",
    "ru" => "ru", "rus" => "ru", "russian" => "ru",
    "ja" => "ja", "jpn" => "ja", "japanese" => "ja",
    "zh" => "zh", "chi" => "zh", "zho" => "zh", "chinese" => "zh",
    "ko" => "ko", "kor" => "ko", "korean" => "ko",
    "sv" => "sv", "swe" => "sv", "swedish" => "sv",
    "da" => "da", "dan" => "da", "danish" => "da",
    "fi" => "fi", "fin" => "fi", "finnish" => "fi",
    "no" => "no", "nor" => "no", "norwegian" => "no",
    "pl" => "pl", "pol" => "pl", "polish" => "pl",
    "cs" => "cs", "ces" => "cs", "cze" => "cs", "czech" => "cs",
    "hu" => "hu", "hun" => "hu", "hungarian" => "hu",
    "tr" => "tr", "tur" => "tr", "turkish" => "tr",
    "el" => "el", "ell" => "el", "gre" => "el", "greek" => "el",
    "he" => "he", "heb" => "he", "hebrew" => "he",
    "ar" => "ar", "ara" => "ar", "arabic" => "ar",
};

/// Language and forced flag read from a subtitle file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubtitleTag {
    /// The language tag as written in the file name (`eng`, `de`).
    pub language: Option<String>,
    /// Whether the subtitle is flagged as forced.
    pub forced: bool,
}

/// Map a language tag to its ISO 639-1 code.
///
/// ```
/// use showforged_parser::language::iso_639_1;
///
/// assert_eq!(iso_639_1("GER"), Some("de"));
/// assert_eq!(iso_639_1("xx"), None);
/// ```
pub fn iso_639_1(tag: &str) -> Option<&'static str> {
    LANGUAGE_TAGS.get(tag.to_lowercase().as_str()).copied()
}

/// Read the language tag and forced flag of a subtitle file.
///
/// Only the part between the video base name and the extension is looked at
/// when the subtitle starts with `video_base`; otherwise all dot separated
/// parts of the subtitle's base name are.
///
/// ```
/// use showforged_parser::language::subtitle_tag;
///
/// let tag = subtitle_tag("Show.S01E01", "Show.S01E01.eng.forced.srt");
/// assert_eq!(tag.language.as_deref(), Some("eng"));
/// assert!(tag.forced);
/// ```
pub fn subtitle_tag(video_base: &str, subtitle_file: &str) -> SubtitleTag {
    let base = showforged_common::paths::base_name(subtitle_file);
    let suffix = match base.get(..video_base.len()) {
        Some(prefix) if !video_base.is_empty() && prefix.eq_ignore_ascii_case(video_base) => {
            &base[video_base.len()..]
        }
        _ => base,
    };

    let mut tag = SubtitleTag::default();
    for part in suffix.split(['.', '_', '-', ' ']).filter(|p| !p.is_empty()) {
        if part.eq_ignore_ascii_case("forced") {
            tag.forced = true;
        } else if tag.language.is_none() && iso_639_1(part).is_some() {
            tag.language = Some(part.to_string());
        }
    }
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_after_video_base() {
        let tag = subtitle_tag("Show - S01E01 - Pilot", "Show - S01E01 - Pilot.de.srt");
        assert_eq!(tag.language.as_deref(), Some("de"));
        assert!(!tag.forced);
    }

    #[test]
    fn test_no_language() {
        let tag = subtitle_tag("Show.S01E01", "Show.S01E01.srt");
        assert_eq!(tag, SubtitleTag::default());
    }

    #[test]
    fn test_unrelated_subtitle_name() {
        let tag = subtitle_tag("Show.S01E01", "other_name.forced.English.srt");
        assert_eq!(tag.language.as_deref(), Some("English"));
        assert!(tag.forced);
    }

    #[test]
    fn test_title_words_are_not_languages_after_base() {
        // "It" in the episode title must not be read as Italian
        let tag = subtitle_tag("Show - S01E01 - It", "Show - S01E01 - It.srt");
        assert_eq!(tag.language, None);
    }
}
