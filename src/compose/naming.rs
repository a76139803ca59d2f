//! Target file names of the files of an episode.

use super::RenameOp;
use crate::config::ThumbNaming;
use crate::model::MediaFile;
use regex::Regex;
use showforged_common::MediaFileType;
use showforged_parser::language::subtitle_tag;
use std::sync::LazyLock;

static EXTRAS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[ _.-]extras[ _.-](.+)$").expect("valid regex"));

/// `.tbn` artwork is a renamed image; its container tells which one.
fn artwork_extension(file: &MediaFile) -> String {
    let ext = file.extension();
    if ext.eq_ignore_ascii_case("tbn") {
        if file.container_format.eq_ignore_ascii_case("png") {
            "png".to_string()
        } else {
            "jpg".to_string()
        }
    } else if ext.eq_ignore_ascii_case("jpeg") {
        "jpg".to_string()
    } else {
        ext.to_string()
    }
}

fn with_extension(name: String, ext: &str) -> String {
    if ext.is_empty() {
        name
    } else {
        format!("{}.{}", name, ext)
    }
}

/// New file names of `file`, given the episode base name.
///
/// `video` is the main video of the episode; subtitles and vsmeta files are
/// named after it. Most files get exactly one name; thumbs get one per
/// configured naming.
pub(crate) fn target_names(
    file: &MediaFile,
    base: &str,
    video: Option<&MediaFile>,
    thumb_naming: &[ThumbNaming],
) -> Vec<(String, RenameOp)> {
    let ext = file.extension();

    match file.file_type() {
        MediaFileType::Video => {
            let marker = file.stacking_marker();
            let name = if !marker.is_empty() {
                format!("{}.{}", base, marker)
            } else if file.stacking_number() > 0 {
                format!("{}.CD{}", base, file.stacking_number())
            } else {
                base.to_string()
            };
            vec![(with_extension(name, ext), RenameOp::Move)]
        }
        MediaFileType::Nfo => vec![(format!("{}.nfo", base), RenameOp::Copy)],
        MediaFileType::Thumb => {
            let ext = artwork_extension(file);
            thumb_naming
                .iter()
                .map(|naming| {
                    let name = match naming {
                        ThumbNaming::FilenameThumb => format!("{}-thumb", base),
                        ThumbNaming::Filename => base.to_string(),
                    };
                    (with_extension(name, &ext), RenameOp::Copy)
                })
                .collect()
        }
        MediaFileType::Fanart => {
            let name = format!("{}-fanart", base);
            vec![(with_extension(name, &artwork_extension(file)), RenameOp::Copy)]
        }
        MediaFileType::Subtitle => vec![(subtitle_name(file, base, video), RenameOp::Move)],
        MediaFileType::Trailer => {
            vec![(with_extension(format!("{}-trailer", base), ext), RenameOp::Move)]
        }
        MediaFileType::MediaInfo => {
            vec![(with_extension(format!("{}-mediainfo", base), ext), RenameOp::Move)]
        }
        MediaFileType::VsMeta => {
            let name = match video {
                Some(video) => format!("{}.{}.vsmeta", base, video.extension()),
                None => file.file_name().to_string(),
            };
            vec![(name, RenameOp::Move)]
        }
        MediaFileType::VideoExtra => {
            let stem = file.base_name();
            let extra = EXTRAS_NAME
                .captures(stem)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .unwrap_or(stem);
            let name = format!("{}-extras-{}", base, extra);
            vec![(with_extension(name, ext), RenameOp::Move)]
        }
        MediaFileType::Unknown => vec![(file.file_name().to_string(), RenameOp::Move)],
    }
}

/// `<base>[.<lang>][.forced].<ext>`
fn subtitle_name(file: &MediaFile, base: &str, video: Option<&MediaFile>) -> String {
    let video_base = video
        .map(MediaFile::base_name_without_stacking)
        .unwrap_or_default();
    let tag = subtitle_tag(&video_base, file.file_name());

    let stream = file.subtitles.first();
    let language = stream
        .map(|s| s.language.as_str())
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .or(tag.language);
    let forced = stream.is_some_and(|s| s.forced) || tag.forced;

    let mut name = base.to_string();
    if let Some(language) = language {
        name.push('.');
        name.push_str(&language);
    }
    if forced {
        name.push_str(".forced");
    }
    with_extension(name, file.extension())
}
