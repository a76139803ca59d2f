//! Token vocabulary.
//!
//! Every token is an accessor over a [`TokenContext`]. Dotted names
//! (`tvShow.year`, `episode.title`) are aliases of the short names and share
//! the same accessor.

use super::{TokenContext, TokenValue};
use crate::model::MediaFile;

/// Reads one token value from a context.
pub type Accessor = fn(&TokenContext<'_>) -> TokenValue;

/// Articles moved to the end of sortable titles when no list is configured.
pub const DEFAULT_TITLE_PREFIXES: &[&str] = &[
    "A", "An", "The", "Der", "Die", "Das", "Ein", "Eine", "Le", "La", "Les", "L'", "L´", "L`",
    "Un", "Une", "Des",
];

fn two_digits(n: i32) -> TokenValue {
    if n < 0 {
        TokenValue::Empty
    } else {
        TokenValue::Text(format!("{:02}", n))
    }
}

fn file_list(ctx: &TokenContext<'_>, field: fn(&MediaFile) -> Vec<String>) -> TokenValue {
    match ctx.media_file {
        Some(file) => TokenValue::list(field(file)),
        None => TokenValue::Empty,
    }
}

fn file_text(ctx: &TokenContext<'_>, field: fn(&MediaFile) -> String) -> TokenValue {
    ctx.media_file
        .map(|file| TokenValue::text(field(file)))
        .unwrap_or(TokenValue::Empty)
}

/// `codec-detail`, or whichever half is present.
fn codec_pair(codec: &str, detail: &str) -> String {
    match (codec.is_empty(), detail.is_empty()) {
        (false, false) => format!("{}-{}", codec, detail),
        (false, true) => codec.to_string(),
        _ => detail.to_string(),
    }
}

fn token(
    names: &'static [&'static str],
    accessor: Accessor,
) -> (&'static [&'static str], Accessor) {
    (names, accessor)
}

/// All tokens with their aliases.
pub(crate) fn builtin() -> Vec<(&'static [&'static str], Accessor)> {
    vec![
        token(&["showTitle", "tvShow.title"], |ctx| {
            TokenValue::text(ctx.show.title.as_str())
        }),
        token(&["showTitleSortable", "tvShow.titleSortable"], |ctx| {
            TokenValue::text(ctx.sortable_show_title())
        }),
        token(&["showYear", "tvShow.year"], |ctx| match ctx.show.year {
            Some(year) if year > 0 => TokenValue::number(year),
            _ => TokenValue::Empty,
        }),
        token(&["parent", "tvShow.parent"], |ctx| {
            TokenValue::text(ctx.show.parent_path())
        }),
        token(&["seasonNr", "episode.season"], |ctx| {
            ctx.episode
                .map(|ep| TokenValue::number(ep.season))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["seasonNr2"], |ctx| {
            ctx.episode
                .map(|ep| two_digits(ep.season))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["seasonNrDvd", "episode.dvdSeason"], |ctx| {
            ctx.episode
                .map(|ep| TokenValue::number(ep.dvd_season))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["seasonNrDvd2"], |ctx| {
            ctx.episode
                .map(|ep| two_digits(ep.dvd_season))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["episodeNr", "episode.episode"], |ctx| {
            ctx.episode
                .map(|ep| TokenValue::number(ep.episode))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["episodeNr2"], |ctx| {
            ctx.episode
                .map(|ep| two_digits(ep.episode))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["episodeNrDvd", "episode.dvdEpisode"], |ctx| {
            ctx.episode
                .map(|ep| TokenValue::number(ep.dvd_episode))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["episodeNrDvd2"], |ctx| {
            ctx.episode
                .map(|ep| two_digits(ep.dvd_episode))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["title", "episode.title"], |ctx| {
            ctx.episode
                .map(|ep| TokenValue::text(ep.title.as_str()))
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["year", "episode.year"], |ctx| {
            ctx.episode
                .and_then(|ep| ep.year())
                .map(TokenValue::number)
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["airedDate", "episode.firstAired"], |ctx| {
            ctx.episode
                .and_then(|ep| ep.first_aired)
                .map(TokenValue::Date)
                .unwrap_or(TokenValue::Empty)
        }),
        token(&["mediaSource", "episode.mediaSource"], |ctx| match ctx.episode {
            Some(ep) if ep.media_source.is_known() => TokenValue::text(ep.media_source.title()),
            _ => TokenValue::Empty,
        }),
        token(&["mediaSource.name"], |ctx| match ctx.episode {
            Some(ep) if ep.media_source.is_known() => TokenValue::text(ep.media_source.name()),
            _ => TokenValue::Empty,
        }),
        token(&["videoResolution", "mediaFile.videoResolution"], |ctx| {
            file_text(ctx, MediaFile::video_resolution)
        }),
        token(&["videoFormat", "mediaFile.videoFormat"], |ctx| {
            file_text(ctx, |f| f.video_format.clone())
        }),
        token(&["videoCodec", "mediaFile.videoCodec"], |ctx| {
            file_text(ctx, |f| f.video_codec.clone())
        }),
        token(&["audioCodec", "mediaFile.audioCodec"], |ctx| {
            file_text(ctx, |f| f.audio_codec().to_string())
        }),
        token(&["audioCodecList", "mediaFile.audioCodecList"], |ctx| {
            file_list(ctx, |f| f.audio_streams.iter().map(|s| s.codec.clone()).collect())
        }),
        token(&["audioChannels", "mediaFile.audioChannels"], |ctx| {
            file_text(ctx, MediaFile::audio_channels)
        }),
        token(&["audioChannelList", "mediaFile.audioChannelList"], |ctx| {
            file_list(ctx, |f| {
                f.audio_streams.iter().map(|s| s.channels_label()).collect()
            })
        }),
        token(&["audioCodecChannels"], |ctx| {
            file_text(ctx, |f| codec_pair(f.audio_codec(), &f.audio_channels()))
        }),
        token(&["videoCodecFormat"], |ctx| {
            file_text(ctx, |f| codec_pair(&f.video_codec, &f.video_format))
        }),
        token(&["audioLanguage", "mediaFile.audioLanguage"], |ctx| {
            file_text(ctx, |f| f.audio_language().to_string())
        }),
        token(&["audioLanguageList", "mediaFile.audioLanguageList"], |ctx| {
            file_list(ctx, |f| {
                f.audio_streams.iter().map(|s| s.language.clone()).collect()
            })
        }),
    ]
}

/// Move a leading article to the end: `The Office` becomes `Office, The`.
///
/// Prefixes ending in an apostrophe (`L'`) attach directly to the next word;
/// all others must be followed by a space. Matching ignores ASCII case.
///
/// ```
/// use showforged::template::sortable_title;
///
/// assert_eq!(sortable_title("The Office", &["The"]), "Office, The");
/// assert_eq!(sortable_title("L'Odyssée", &["L'"]), "Odyssée, L'");
/// assert_eq!(sortable_title("Theodore", &["The"]), "Theodore");
/// ```
pub fn sortable_title<S: AsRef<str>>(title: &str, prefixes: &[S]) -> String {
    for prefix in prefixes {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            continue;
        }
        let Some(head) = title.get(..prefix.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(prefix) {
            continue;
        }

        let rest = &title[prefix.len()..];
        let attached = prefix.ends_with(['\'', '´', '`']);
        if attached && !rest.is_empty() {
            return format!("{}, {}", rest.trim_start(), head);
        }
        if !attached && rest.starts_with(' ') && !rest.trim().is_empty() {
            return format!("{}, {}", rest.trim_start(), head);
        }
    }
    title.to_string()
}
