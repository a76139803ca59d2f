//! # showforged-parser
//!
//! Season/episode detection and title cleaning for TV episode file names.
//!
//! File names of TV episodes come in many shapes: `Show.S01E02.720p.mkv`,
//! `Show - 1x02 - Title.avi`, `Season 1/02 Title.mkv`, `show.102.mkv` or
//! `Show.2011-10-05.mkv`. This crate reads season and episode numbers (and
//! air dates) from such names and recovers the episode title.
//!
//! ## Quick Start
//!
//! ```
//! use showforged_parser::detect;
//!
//! let result = detect("Breaking.Bad.S05E10.720p.HDTV.x264.mkv", "Breaking Bad");
//! assert_eq!(result.season, 5);
//! assert_eq!(result.episodes, vec![10]);
//! ```
//!
//! ## Title Cleaning
//!
//! ```
//! use showforged_parser::clean_title;
//!
//! let title = clean_title("BlBlub - S08E01 - Messy.mp4", "BlBlub");
//! assert_eq!(title, "Messy");
//! ```
//!
//! ## Configurable Detection
//!
//! ```
//! use showforged_parser::EpisodeDetector;
//! use showforged_parser::config::DetectorConfig;
//!
//! let config = DetectorConfig::builder()
//!     .title_hint("440")
//!     .bad_words(["GRP"])
//!     .build();
//!
//! let detector = EpisodeDetector::new(config);
//! let result = detector.detect("440 - 2x09 - GRP.avi");
//! assert_eq!(result.to_string(), "S:2 E:9");
//! ```

pub mod config;
pub mod language;
pub mod model;
pub mod stacking;
pub mod stopwords;

mod episode;
mod patterns;
mod title;

pub use episode::decode_roman;
pub use model::EpisodeMatchingResult;

use config::DetectorConfig;
use regex::Regex;

/// Detect season and episode numbers in a file name using default settings.
///
/// `title_hint` is the show title; it is removed before numbers are searched.
/// Pass `""` when the title is unknown.
///
/// # Examples
///
/// ```
/// use showforged_parser::detect;
///
/// let result = detect("Stargate SG-1 s01e01e02e03.avi", "Stargate SG-1");
/// assert_eq!(result.episodes, vec![1, 2, 3]);
///
/// let result = detect("name.102.mkv", "");
/// assert_eq!((result.season, result.episodes), (1, vec![2]));
/// ```
pub fn detect(name: &str, title_hint: &str) -> EpisodeMatchingResult {
    episode::detect(name, title_hint, &[], true)
}

/// Detect on the file name of `relative_path`, consulting its folders for
/// a missing season.
///
/// # Examples
///
/// ```
/// use showforged_parser::detect_from_relative_path;
///
/// let result = detect_from_relative_path("Season 1/04 Charlie Has Cancer.avi", "");
/// assert_eq!(result.to_string(), "S:1 E:4");
/// ```
pub fn detect_from_relative_path(relative_path: &str, title_hint: &str) -> EpisodeMatchingResult {
    episode::detect_from_relative_path(relative_path, title_hint, &[], true)
}

/// Recover the episode title from a file name using default settings.
///
/// Release noise, the show title and season/episode markers are removed.
/// The result is stable: cleaning it again returns it unchanged.
pub fn clean_title(name: &str, title_hint: &str) -> String {
    title::clean_title(name, title_hint, &[])
}

/// A configurable episode detector.
///
/// The detector compiles its bad words once and can be shared across
/// threads.
///
/// ```
/// use showforged_parser::EpisodeDetector;
///
/// let detector = EpisodeDetector::default();
/// let result = detector.detect_with_title("Doctor.Who.S13E02.mkv", "Doctor Who");
/// assert_eq!(result.to_string(), "S:13 E:2");
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeDetector {
    config: DetectorConfig,
    bad_words: Vec<Regex>,
}

impl EpisodeDetector {
    /// Create a new detector with the given configuration.
    pub fn new(config: DetectorConfig) -> Self {
        let bad_words = stopwords::compile_bad_words(&config.bad_words);
        Self { config, bad_words }
    }

    /// The configuration this detector was created with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn default_title(&self) -> &str {
        self.config.title_hint.as_deref().unwrap_or("")
    }

    /// Detect using the configured title hint.
    pub fn detect(&self, name: &str) -> EpisodeMatchingResult {
        self.detect_with_title(name, self.default_title())
    }

    /// Detect with an explicit title hint.
    pub fn detect_with_title(&self, name: &str, title_hint: &str) -> EpisodeMatchingResult {
        episode::detect(
            name,
            title_hint,
            &self.bad_words,
            self.config.resolve_disc_files,
        )
    }

    /// Detect on a path relative to the show folder.
    pub fn detect_from_relative_path(
        &self,
        relative_path: &str,
        title_hint: &str,
    ) -> EpisodeMatchingResult {
        episode::detect_from_relative_path(
            relative_path,
            title_hint,
            &self.bad_words,
            self.config.resolve_disc_files,
        )
    }

    /// Recover the episode title with an explicit title hint.
    pub fn clean_title(&self, name: &str, title_hint: &str) -> String {
        title::clean_title(name, title_hint, &self.bad_words)
    }
}

impl Default for EpisodeDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_season_episode() {
        let result = detect("Breaking Bad S05E01 Live Free Or Die.avi", "Breaking Bad");
        assert_eq!(result.season, 5);
        assert_eq!(result.episodes, vec![1]);
        assert!(!result.stacking_marker_found);
    }

    #[test]
    fn test_detect_date() {
        let result = detect("Show.2011-10-05.mkv", "Show");
        assert_eq!(result.season, 2011);
        assert_eq!(
            result.date,
            chrono::NaiveDate::from_ymd_opt(2011, 10, 5)
        );
    }

    #[test]
    fn test_detect_nothing() {
        let result = detect("name.mkv", "");
        assert!(!result.has_season());
        assert!(!result.has_episodes());
    }

    #[test]
    fn test_title_hint_protects_numeric_show() {
        let result = detect("440 - 2x09 - 440 Volts.avi", "440");
        assert_eq!(result.to_string(), "S:2 E:9");
    }

    #[test]
    fn test_detector_bad_words() {
        let name = "Show - S01E02 - GRP Title.mkv";
        assert_eq!(clean_title(name, "Show"), "GRP Title");

        let detector = EpisodeDetector::new(
            DetectorConfig::builder().bad_words(["GRP"]).build(),
        );
        assert_eq!(detector.clean_title(name, "Show"), "Title");
        assert_eq!(detector.detect_with_title(name, "Show").to_string(), "S:1 E:2");
    }

    #[test]
    fn test_detector_uses_configured_title() {
        let detector =
            EpisodeDetector::new(DetectorConfig::builder().title_hint("24").build());
        let result = detector.detect("24 - 3x05.avi");
        assert_eq!(result.to_string(), "S:3 E:5");
    }

    #[test]
    fn test_disc_file_resolution() {
        let detector = EpisodeDetector::default();
        let result = detector.detect_with_title(
            "Dexter S01E01 S01E02 S01E03/VIDEO_TS/VIDEO_TS.VOB",
            "Dexter",
        );
        assert_eq!(result.episodes, vec![1, 2, 3]);
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("BlBlub - S08E01 - Messy.mp4", ""), "BlBlub Messy");
    }
}
