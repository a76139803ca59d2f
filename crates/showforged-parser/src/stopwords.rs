//! Release-tag stopwords stripped before episode numbers are searched.
//!
//! Tags such as `720p`, `x264` or `cd1` contain digits that would otherwise be
//! picked up as season or episode numbers. A stopword is only removed when it
//! is delimited by separators on both sides (or ends the name), and each
//! removal replaces the leading separator, the word and the trailing separator
//! with a single space.

use regex::Regex;
use std::sync::LazyLock;

/// Words removed from episode file names, in removal order.
pub const STOPWORDS: &[&str] = &[
    "1080", "1080i", "1080p", "3d", "480i", "480p", "576i", "576p", "720", "720i", "720p", "ac3",
    "ac3ld", "ac3md", "aoe", "bd5", "bdrip", "blueray", "bluray", "brrip", "cam", "cd1", "cd2",
    "cd3", "cd4", "cd5", "cd6", "cd7", "cd8", "cd9", "complete", "custom", "dc", "disc1", "disc2",
    "disc3", "disc4", "disc5", "disc6", "disc7", "disc8", "disc9", "divx", "divx5", "dl", "docu",
    "dsr", "dsrip", "dts", "dtv", "dubbed", "dutch", "dvd", "dvd1", "dvd2", "dvd3", "dvd4", "dvd5",
    "dvd6", "dvd7", "dvd8", "dvd9", "dvdivx", "dvdrip", "dvdscr", "dvdscreener", "emule", "etm",
    "extended", "fragment", "fs", "fps", "german", "h264", "hddvd", "hdrip", "hdtv", "hdtvrip",
    "hevc", "hrhd", "hrhdtv", "ind", "internal", "ld", "limited", "md", "multisubs", "nfo",
    "nfofix", "ntg", "ntsc", "ogg", "ogm", "pal", "pdtv", "proper", "pso", "r3", "r5", "read",
    "repack", "rerip", "retail", "roor", "rs", "rsvcd", "screener", "se", "subbed", "svcd",
    "swedish", "tc", "telecine", "telesync", "ts", "uncut", "unrated", "vcf", "webdl", "webrip",
    "workprint", "ws", "www", "x264", "xf", "xvid", "xvidvd", "xxx",
];

static STOPWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STOPWORDS
        .iter()
        .map(|word| delimited_word(&regex::escape(word)).expect("valid stopword regex"))
        .collect()
});

/// Build the `separator + word + (separator | end)` pattern for a word that
/// is already a regex fragment.
pub(crate) fn delimited_word(fragment: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i)[^A-Za-z0-9_](?:{})(?:[^A-Za-z0-9_]|$)",
        fragment
    ))
}

/// Compile user supplied bad words.
///
/// A bad word may be a regex fragment; one that does not compile is matched
/// literally instead.
pub fn compile_bad_words<S: AsRef<str>>(words: &[S]) -> Vec<Regex> {
    words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .filter_map(|word| match delimited_word(word) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::warn!(word, error = %err, "bad word is not a valid regex, matching literally");
                delimited_word(&regex::escape(word)).ok()
            }
        })
        .collect()
}

/// Remove a resolution tag, all stopwords and the given bad words.
pub fn remove_stopwords(name: &str, bad_words: &[Regex]) -> String {
    let mut result = crate::patterns::RESOLUTION.replace(name, " ").into_owned();

    for re in STOPWORD_PATTERNS.iter().chain(bad_words) {
        let replaced = re.replace_all(&result, " ");
        if replaced.len() != result.len() {
            tracing::trace!(pattern = re.as_str(), before = %result, after = %replaced, "removed stopword");
        }
        result = replaced.into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_delimited_stopwords() {
        assert_eq!(
            remove_stopwords("Show.S01E01.720p.HDTV.x264-GRP.mkv", &[]),
            "Show.S01E01 GRP.mkv"
        );
    }

    #[test]
    fn test_keeps_embedded_words() {
        assert_eq!(remove_stopwords("Dvdrip2.mkv", &[]), "Dvdrip2.mkv");
        assert_eq!(remove_stopwords("Season.mkv", &[]), "Season.mkv");
    }

    #[test]
    fn test_stopword_at_end() {
        assert_eq!(remove_stopwords("Show S01E01 German", &[]), "Show S01E01 ");
    }

    #[test]
    fn test_resolution_removed_once() {
        assert_eq!(
            remove_stopwords("Show S01E01 (1920x1080) (640x480)", &[]),
            "Show S01E01  ) (640x480)"
        );
    }

    #[test]
    fn test_bad_words() {
        let bad = compile_bad_words(&["GRP", "  ", "sample[0-9]"]);
        assert_eq!(bad.len(), 2);
        assert_eq!(
            remove_stopwords("Show.S01E01.sample1.GRP.mkv", &bad),
            "Show.S01E01 mkv"
        );
    }

    #[test]
    fn test_invalid_bad_word_matches_literally() {
        let bad = compile_bad_words(&["a(b"]);
        assert_eq!(bad.len(), 1);
        assert_eq!(remove_stopwords("Show.a(b.mkv", &bad), "Show mkv");
    }
}
