//! Path utilities for file names handed over by media libraries.
//!
//! Episode file names reach the detector and the composer as plain strings
//! that may use either `/` or `\` as separator (libraries scanned on one
//! platform and renamed on another). The string helpers here treat both as
//! separators; the `Path` based checks mirror the file type detection used by
//! the scanner.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "m2ts", "webm", "mov", "wmv", "flv", "mpg", "mpeg", "vob",
    "iso", "divx", "ogm", "rmvb", "3gp", "bdmv",
];

/// List of supported subtitle file extensions.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "sub", "vtt", "idx", "smi", "sup"];

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tbn"];

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Return the last path component of `path`.
///
/// # Examples
///
/// ```
/// use showforged_common::paths::file_name;
///
/// assert_eq!(file_name("Show/Season 1/ep.mkv"), "ep.mkv");
/// assert_eq!(file_name("C:\\tv\\ep.mkv"), "ep.mkv");
/// assert_eq!(file_name("ep.mkv"), "ep.mkv");
/// ```
pub fn file_name(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Return everything before the last separator, or `""` for a bare name.
///
/// # Examples
///
/// ```
/// use showforged_common::paths::parent;
///
/// assert_eq!(parent("Show/Season 1/ep.mkv"), "Show/Season 1");
/// assert_eq!(parent("ep.mkv"), "");
/// ```
pub fn parent(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Return the extension of the last path component, without the dot.
///
/// # Examples
///
/// ```
/// use showforged_common::paths::extension;
///
/// assert_eq!(extension("Show/ep.part1.mkv"), "mkv");
/// assert_eq!(extension("Show.v1/README"), "");
/// ```
pub fn extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

/// Return the last path component without its extension.
///
/// # Examples
///
/// ```
/// use showforged_common::paths::base_name;
///
/// assert_eq!(base_name("Show/ep.part1.mkv"), "ep.part1");
/// assert_eq!(base_name("noext"), "noext");
/// ```
pub fn base_name(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Check whether `name` is one of the structure files of a DVD or Blu-ray
/// folder (`VIDEO_TS.VOB`, `VTS_01_1.IFO`, `index.bdmv`, `00001.m2ts`, ...).
///
/// Disc episodes are identified by their folder, not by these file names.
///
/// # Examples
///
/// ```
/// use showforged_common::paths::is_disc_file;
///
/// assert!(is_disc_file("Show/S01E01/VIDEO_TS/VTS_01_1.VOB"));
/// assert!(is_disc_file("BDMV/STREAM/00001.m2ts"));
/// assert!(!is_disc_file("Show.S01E01.vob"));
/// ```
pub fn is_disc_file(path: &str) -> bool {
    let name = file_name(path).to_lowercase();
    let (stem, ext) = match name.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };

    match ext {
        "vob" | "bup" | "ifo" => {
            if stem == "video_ts" {
                return true;
            }
            // vts_NN_N
            let bytes = stem.as_bytes();
            bytes.len() == 8
                && stem.starts_with("vts_")
                && bytes[4].is_ascii_digit()
                && bytes[5].is_ascii_digit()
                && bytes[6] == b'_'
                && bytes[7].is_ascii_digit()
        }
        "bdmv" => stem == "index" || stem == "movieobject",
        "m2ts" => stem.len() == 5 && stem.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

fn has_extension_in(path: &Path, list: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| list.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use showforged_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("episode.mkv")));
/// assert!(is_video_file(Path::new("/path/to/episode.MP4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, VIDEO_EXTENSIONS)
}

/// Check if a path has a subtitle file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use showforged_common::paths::is_subtitle_file;
///
/// assert!(is_subtitle_file(Path::new("episode.en.srt")));
/// assert!(!is_subtitle_file(Path::new("episode.mkv")));
/// ```
pub fn is_subtitle_file(path: &Path) -> bool {
    has_extension_in(path, SUBTITLE_EXTENSIONS)
}

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use showforged_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("episode-thumb.jpg")));
/// assert!(!is_image_file(Path::new("episode.mkv")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    has_extension_in(path, IMAGE_EXTENSIONS)
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Get the list of subtitle file extensions.
#[must_use]
pub fn subtitle_extensions() -> &'static [&'static str] {
    SUBTITLE_EXTENSIONS
}

/// Get the list of image file extensions.
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(file_name("a\\b/c.mkv"), "c.mkv");
        assert_eq!(parent("a\\b/c.mkv"), "a\\b");
        assert_eq!(parent("/c.mkv"), "");
    }

    #[test]
    fn test_extension_only_looks_at_file_name() {
        assert_eq!(extension("dir.with.dots/file"), "");
        assert_eq!(base_name("dir.with.dots/file"), "file");
        assert_eq!(extension(".hidden"), "hidden");
        assert_eq!(base_name(".hidden"), "");
    }

    #[test]
    fn test_disc_files() {
        assert!(is_disc_file("VIDEO_TS.IFO"));
        assert!(is_disc_file("video_ts.bup"));
        assert!(is_disc_file("VTS_01_0.BUP"));
        assert!(is_disc_file("index.bdmv"));
        assert!(is_disc_file("MovieObject.bdmv"));
        assert!(is_disc_file("12345.m2ts"));
        assert!(!is_disc_file("1234.m2ts"));
        assert!(!is_disc_file("VTS_1_0.VOB"));
        assert!(!is_disc_file("video_ts"));
    }

    #[test]
    fn test_video_extensions_case_insensitive() {
        assert!(is_video_file(Path::new("EP.MKV")));
        assert!(is_video_file(Path::new("EP.M2TS")));
        assert!(!is_video_file(Path::new("EP")));
    }

    #[test]
    fn test_extension_lists() {
        assert!(video_extensions().contains(&"mkv"));
        assert!(subtitle_extensions().contains(&"srt"));
        assert!(image_extensions().contains(&"jpg"));
    }
}
