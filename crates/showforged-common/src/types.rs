//! Core type definitions for media files and their sources.
//!
//! All enums are serialized in snake_case so that rename plans and input
//! descriptions read naturally as JSON or TOML.

use crate::paths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Role of a physical file belonging to an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFileType {
    /// The main video, possibly one part of a stacked episode.
    Video,
    /// Bonus material stored next to the episode.
    VideoExtra,
    /// A trailer for the episode.
    Trailer,
    /// Kodi style metadata file.
    Nfo,
    /// Episode thumbnail.
    Thumb,
    /// Episode fanart.
    Fanart,
    /// External subtitle.
    Subtitle,
    /// Exported media information (`-mediainfo.xml`).
    MediaInfo,
    /// Synology Video Station metadata (`.vsmeta`).
    VsMeta,
    /// Anything else found next to the episode.
    Unknown,
}

impl MediaFileType {
    /// Guess the role of a file from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use showforged_common::MediaFileType;
    ///
    /// assert_eq!(MediaFileType::from_file_name("ep.mkv"), MediaFileType::Video);
    /// assert_eq!(MediaFileType::from_file_name("ep-thumb.jpg"), MediaFileType::Thumb);
    /// assert_eq!(MediaFileType::from_file_name("ep.de.srt"), MediaFileType::Subtitle);
    /// assert_eq!(MediaFileType::from_file_name("ep.mkv.vsmeta"), MediaFileType::VsMeta);
    /// ```
    pub fn from_file_name(name: &str) -> Self {
        let name = paths::file_name(name);
        let lower = name.to_lowercase();
        let stem = paths::base_name(&lower);
        let path = Path::new(&lower);

        if lower.ends_with(".vsmeta") {
            Self::VsMeta
        } else if lower.ends_with(".nfo") {
            Self::Nfo
        } else if stem.ends_with("-mediainfo") {
            Self::MediaInfo
        } else if paths::is_subtitle_file(path) {
            Self::Subtitle
        } else if paths::is_image_file(path) {
            if stem.ends_with("-fanart") {
                Self::Fanart
            } else {
                Self::Thumb
            }
        } else if paths::is_video_file(path) {
            if stem.ends_with("-trailer") {
                Self::Trailer
            } else if stem.contains("-extras-") {
                Self::VideoExtra
            } else {
                Self::Video
            }
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for MediaFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::VideoExtra => write!(f, "video_extra"),
            Self::Trailer => write!(f, "trailer"),
            Self::Nfo => write!(f, "nfo"),
            Self::Thumb => write!(f, "thumb"),
            Self::Fanart => write!(f, "fanart"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::MediaInfo => write!(f, "media_info"),
            Self::VsMeta => write!(f, "vs_meta"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Where the media was sourced from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    #[default]
    Unknown,
    UhdBluray,
    Bluray,
    Hddvd,
    Dvd,
    Tv,
    Vhs,
    Laserdisc,
    DVhs,
    Stream,
}

impl MediaSource {
    /// Human readable title, as used in file names.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::UhdBluray => "UHD Blu-ray",
            Self::Bluray => "Blu-ray",
            Self::Hddvd => "HD DVD",
            Self::Dvd => "DVD",
            Self::Tv => "TV",
            Self::Vhs => "VHS",
            Self::Laserdisc => "LaserDisc",
            Self::DVhs => "D-VHS",
            Self::Stream => "Stream",
        }
    }

    /// Constant style name (`BLURAY`, `UHD_BLURAY`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::UhdBluray => "UHD_BLURAY",
            Self::Bluray => "BLURAY",
            Self::Hddvd => "HDDVD",
            Self::Dvd => "DVD",
            Self::Tv => "TV",
            Self::Vhs => "VHS",
            Self::Laserdisc => "LASERDISC",
            Self::DVhs => "D_VHS",
            Self::Stream => "STREAM",
        }
    }

    /// Whether a source is known at all.
    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(MediaFileType::from_file_name("a/b/ep.avi"), MediaFileType::Video);
        assert_eq!(MediaFileType::from_file_name("ep.NFO"), MediaFileType::Nfo);
        assert_eq!(MediaFileType::from_file_name("ep.tbn"), MediaFileType::Thumb);
        assert_eq!(
            MediaFileType::from_file_name("ep-fanart.png"),
            MediaFileType::Fanart
        );
        assert_eq!(
            MediaFileType::from_file_name("ep-trailer.mp4"),
            MediaFileType::Trailer
        );
        assert_eq!(
            MediaFileType::from_file_name("ep-extras-making of.mkv"),
            MediaFileType::VideoExtra
        );
        assert_eq!(
            MediaFileType::from_file_name("ep-mediainfo.xml"),
            MediaFileType::MediaInfo
        );
        assert_eq!(MediaFileType::from_file_name("ep.txt"), MediaFileType::Unknown);
    }

    #[test]
    fn test_media_source_names() {
        assert_eq!(MediaSource::Bluray.to_string(), "Blu-ray");
        assert_eq!(MediaSource::Bluray.name(), "BLURAY");
        assert_eq!(MediaSource::DVhs.name(), "D_VHS");
        assert!(!MediaSource::default().is_known());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MediaFileType::VsMeta).unwrap();
        assert_eq!(json, "\"vs_meta\"");
        let source: MediaSource = serde_json::from_str("\"uhd_bluray\"").unwrap();
        assert_eq!(source, MediaSource::UhdBluray);
    }
}
