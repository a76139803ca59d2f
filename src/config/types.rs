use serde::{Deserialize, Serialize};
use showforged_parser::config::DetectorConfig;

use crate::template::DEFAULT_TITLE_PREFIXES;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub renamer: RenamerSettings,
}

/// Templates and flags of the TV show renamer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenamerSettings {
    /// Template of the show folder; blank keeps the current folder name.
    #[serde(default = "default_show_folder_pattern")]
    pub show_folder_pattern: String,

    /// Template of the season folder, relative to the show folder.
    #[serde(default = "default_season_folder_pattern")]
    pub season_folder_pattern: String,

    /// Template of the episode file base name.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Transliterate names to ASCII.
    #[serde(default)]
    pub ascii_replacement: bool,

    /// Replace spaces in names with `space_replacement`.
    #[serde(default)]
    pub space_substitution: bool,

    #[serde(default = "default_space_replacement")]
    pub space_replacement: String,

    /// Thumb file names to write; one copy per entry.
    #[serde(default = "default_thumb_naming")]
    pub thumb_naming: Vec<ThumbNaming>,

    /// Release group names and similar words removed before detection.
    #[serde(default)]
    pub bad_words: Vec<String>,

    /// Articles moved to the end of `showTitleSortable`.
    #[serde(default = "default_title_prefixes")]
    pub title_prefixes: Vec<String>,

    /// Detect disc structure files (`VIDEO_TS.IFO`) from their folder names.
    #[serde(default = "default_resolve_disc_files")]
    pub resolve_disc_files: bool,
}

fn default_show_folder_pattern() -> String {
    "${showTitle} (${showYear})".to_string()
}

fn default_season_folder_pattern() -> String {
    "Season ${seasonNr}".to_string()
}

fn default_file_pattern() -> String {
    "${showTitle} - S${seasonNr2}E${episodeNr2} - ${title}".to_string()
}

fn default_space_replacement() -> String {
    "_".to_string()
}

fn default_thumb_naming() -> Vec<ThumbNaming> {
    vec![ThumbNaming::FilenameThumb]
}

fn default_title_prefixes() -> Vec<String> {
    DEFAULT_TITLE_PREFIXES.iter().map(|p| p.to_string()).collect()
}

fn default_resolve_disc_files() -> bool {
    true
}

impl Default for RenamerSettings {
    fn default() -> Self {
        Self {
            show_folder_pattern: default_show_folder_pattern(),
            season_folder_pattern: default_season_folder_pattern(),
            file_pattern: default_file_pattern(),
            ascii_replacement: false,
            space_substitution: false,
            space_replacement: default_space_replacement(),
            thumb_naming: default_thumb_naming(),
            bad_words: Vec::new(),
            title_prefixes: default_title_prefixes(),
            resolve_disc_files: default_resolve_disc_files(),
        }
    }
}

impl RenamerSettings {
    /// Replacement for spaces, if space substitution is enabled.
    pub fn space_replacement(&self) -> Option<&str> {
        self.space_substitution
            .then_some(self.space_replacement.as_str())
    }

    /// Detector settings matching these renamer settings.
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::builder()
            .bad_words(self.bad_words.iter().cloned())
            .resolve_disc_files(self.resolve_disc_files)
            .build()
    }
}

/// File name variants for episode thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbNaming {
    /// `<base>-thumb.<ext>`
    FilenameThumb,
    /// `<base>.<ext>`
    Filename,
}
