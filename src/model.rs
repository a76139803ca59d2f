//! Media model handed in by callers: shows, episodes and their files.
//!
//! These are plain data carriers. Nothing here is persisted; a library
//! scanner or the `plan` command fills them in and the composer reads them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use showforged_common::{paths, MediaFileType, MediaSource};
use showforged_parser::stacking;

/// A TV show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvShow {
    /// Show title.
    pub title: String,

    /// First air year; `None` or `0` when unknown.
    #[serde(default)]
    pub year: Option<i32>,

    /// Library root the show lives in.
    #[serde(default)]
    pub data_source: String,

    /// Current show folder, absolute or relative to `data_source`.
    #[serde(default)]
    pub path: String,

    /// All known episodes of the show.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl TvShow {
    /// Create a show with a title and an optional year.
    pub fn new(title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            title: title.into(),
            year,
            ..Default::default()
        }
    }

    /// Name of the current show folder.
    pub fn folder_name(&self) -> &str {
        paths::file_name(self.path.trim_end_matches(['/', '\\']))
    }

    /// Folder path between the data source and the show folder.
    pub fn parent_path(&self) -> &str {
        let path = self.path.trim_end_matches(['/', '\\']);
        let data_source = self.data_source.trim_end_matches(['/', '\\']);
        let relative = path
            .strip_prefix(data_source)
            .filter(|rest| {
                !data_source.is_empty() && (rest.is_empty() || rest.starts_with(['/', '\\']))
            })
            .unwrap_or(path)
            .trim_start_matches(['/', '\\']);
        paths::parent(relative)
    }
}

fn unknown_number() -> i32 {
    -1
}

/// One episode of a show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title.
    #[serde(default)]
    pub title: String,

    /// Aired season number.
    pub season: i32,

    /// Aired episode number.
    pub episode: i32,

    /// DVD order season number, `-1` when unknown.
    #[serde(default = "unknown_number")]
    pub dvd_season: i32,

    /// DVD order episode number, `-1` when unknown.
    #[serde(default = "unknown_number")]
    pub dvd_episode: i32,

    /// First air date.
    #[serde(default)]
    pub first_aired: Option<NaiveDate>,

    /// Where the episode was sourced from.
    #[serde(default)]
    pub media_source: MediaSource,

    /// Folder holding the episode's video, relative to the show folder.
    #[serde(default)]
    pub path: String,
}

impl Episode {
    /// Create an episode with aired numbering.
    pub fn new(season: i32, episode: i32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            season,
            episode,
            dvd_season: -1,
            dvd_episode: -1,
            first_aired: None,
            media_source: MediaSource::Unknown,
            path: String::new(),
        }
    }

    /// Year of the first air date.
    pub fn year(&self) -> Option<i32> {
        self.first_aired.map(|date| date.year())
    }
}

/// One audio track of a video file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    #[serde(default)]
    pub codec: String,
    #[serde(default)]
    pub channels: u32,
    #[serde(default)]
    pub language: String,
}

impl AudioStream {
    /// Channel count as shown in names (`6ch`), empty when unknown.
    pub fn channels_label(&self) -> String {
        if self.channels == 0 {
            String::new()
        } else {
            format!("{}ch", self.channels)
        }
    }
}

/// One subtitle track, embedded or external.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleStream {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub forced: bool,
}

/// A physical file belonging to one or more episodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFile {
    /// Path relative to the show folder.
    pub path: String,

    /// Explicit file role; guessed from the file name when absent.
    #[serde(default)]
    pub file_type: Option<MediaFileType>,

    /// Explicit stacking marker; read from the file name when empty.
    #[serde(default)]
    pub stacking_marker: String,

    /// Explicit stacking part number; read from the file name when 0.
    #[serde(default)]
    pub stacking: u32,

    #[serde(default)]
    pub video_codec: String,

    /// Format label such as `1080p` or `SD`.
    #[serde(default)]
    pub video_format: String,

    #[serde(default)]
    pub video_width: u32,

    #[serde(default)]
    pub video_height: u32,

    /// Container format (`MKV`, `PNG`, `JPEG`).
    #[serde(default)]
    pub container_format: String,

    #[serde(default)]
    pub audio_streams: Vec<AudioStream>,

    #[serde(default)]
    pub subtitles: Vec<SubtitleStream>,
}

impl MediaFile {
    /// Create a media file from its path relative to the show folder.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn file_name(&self) -> &str {
        paths::file_name(&self.path)
    }

    pub fn extension(&self) -> &str {
        paths::extension(&self.path)
    }

    pub fn base_name(&self) -> &str {
        paths::base_name(&self.path)
    }

    /// Folder of the file relative to the show folder, `""` for the root.
    pub fn folder(&self) -> &str {
        paths::parent(&self.path)
    }

    /// The file's role, explicit or guessed from its name.
    pub fn file_type(&self) -> MediaFileType {
        self.file_type
            .unwrap_or_else(|| MediaFileType::from_file_name(&self.path))
    }

    /// Whether this is a DVD or Blu-ray structure file.
    pub fn is_disc_file(&self) -> bool {
        paths::is_disc_file(&self.path)
    }

    /// Stacking marker of the file (`CD1`, `part2`), or `""`.
    pub fn stacking_marker(&self) -> &str {
        if self.stacking_marker.is_empty() {
            stacking::stacking_marker(self.file_name())
        } else {
            &self.stacking_marker
        }
    }

    /// Stacking part number, or 0.
    pub fn stacking_number(&self) -> u32 {
        if self.stacking == 0 {
            stacking::stacking_number(self.file_name())
        } else {
            self.stacking
        }
    }

    /// Base name with the stacking marker removed.
    pub fn base_name_without_stacking(&self) -> String {
        let cleaned = stacking::clean_stacking_markers(self.file_name());
        paths::base_name(&cleaned).to_string()
    }

    /// `1920x1080`, or empty when the dimensions are unknown.
    pub fn video_resolution(&self) -> String {
        if self.video_width == 0 || self.video_height == 0 {
            String::new()
        } else {
            format!("{}x{}", self.video_width, self.video_height)
        }
    }

    /// Codec of the first audio stream.
    pub fn audio_codec(&self) -> &str {
        self.audio_streams
            .first()
            .map(|s| s.codec.as_str())
            .unwrap_or("")
    }

    /// Channel label of the first audio stream.
    pub fn audio_channels(&self) -> String {
        self.audio_streams
            .first()
            .map(AudioStream::channels_label)
            .unwrap_or_default()
    }

    /// Language of the first audio stream.
    pub fn audio_language(&self) -> &str {
        self.audio_streams
            .first()
            .map(|s| s.language.as_str())
            .unwrap_or("")
    }
}

/// Files shared by one episode, or by the episodes of a multi-episode file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeFileGroup {
    pub episodes: Vec<Episode>,
    pub files: Vec<MediaFile>,
}

impl EpisodeFileGroup {
    pub fn new(episodes: Vec<Episode>, files: Vec<MediaFile>) -> Self {
        Self { episodes, files }
    }

    /// The first video file of the group.
    pub fn main_video(&self) -> Option<&MediaFile> {
        self.files
            .iter()
            .find(|f| f.file_type() == MediaFileType::Video)
    }
}
