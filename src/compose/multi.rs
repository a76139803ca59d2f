//! Episode file base names, including files holding several episodes.
//!
//! For a multi-episode file the season/episode block of the file pattern
//! (`S${seasonNr2}E${episodeNr2}` with its `S`/`Season`/`E`/`x`/... prefix)
//! is rendered once per episode and joined with a space, and the title token
//! is rendered once per episode and joined with ` - `. Every other token is
//! taken from the first episode:
//!
//! `Show - S01E02 S01E03 - First Title - Second Title`

use super::{Composer, EPISODE_TOKENS, SEASON_TOKENS, TITLE_TOKENS};
use crate::model::{Episode, MediaFile, TvShow};
use crate::template::{parse, parsed_tokens, translate_legacy, TokenContext, TokenExpr};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static SEASON_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:staffel|season|s)\s?$").expect("valid regex"));

static EPISODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:folge|episode|ep|e|x)\s?$").expect("valid regex"));

const BLOCK_MARKER: &str = "\u{E000}";
const TITLE_MARKER: &str = "\u{E001}";

/// Start of a token including a literal prefix directly in front of it.
fn extend_back(template: &str, token: &TokenExpr<'_>, prefix: &Regex) -> usize {
    prefix
        .find(&template[..token.span.start])
        .map(|m| m.start())
        .unwrap_or(token.span.start)
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn episode_context<'s>(
    composer: &'s Composer<'_>,
    show: &'s TvShow,
    episode: &'s Episode,
    video: Option<&'s MediaFile>,
) -> TokenContext<'s> {
    let ctx = composer.context(show).with_episode(episode);
    match video {
        Some(video) => ctx.with_media_file(video),
        None => ctx,
    }
}

/// Render the base name of an episode file. `episodes` must be sorted and
/// free of duplicates.
pub(crate) fn render_base_name(
    composer: &Composer<'_>,
    show: &TvShow,
    episodes: &[&Episode],
    video: Option<&MediaFile>,
) -> String {
    let pattern = &composer.settings.file_pattern;
    let Some(first) = episodes.first() else {
        return String::new();
    };
    let first_ctx = episode_context(composer, show, first, video);

    if episodes.len() == 1 {
        return composer.finish(&composer.render(pattern, &first_ctx));
    }

    let template = translate_legacy(pattern);
    let segments = parse(&template);
    let tokens: Vec<&TokenExpr<'_>> = parsed_tokens(&segments).collect();

    let season = tokens.iter().find(|t| SEASON_TOKENS.contains(&t.name));
    let Some(episode) = tokens.iter().find(|t| EPISODE_TOKENS.contains(&t.name)) else {
        tracing::warn!(
            pattern = pattern.as_str(),
            "file pattern has no episode token, naming multi-episode file after its first episode"
        );
        return composer.finish(&composer.render(pattern, &first_ctx));
    };

    let mut block = extend_back(&template, episode, &EPISODE_PREFIX)..episode.span.end;
    if let Some(season) = season {
        let start = extend_back(&template, season, &SEASON_PREFIX);
        block = block.start.min(start)..block.end.max(season.span.end);
    }

    let title = tokens
        .iter()
        .find(|t| TITLE_TOKENS.contains(&t.name) && !overlaps(&t.span, &block))
        .map(|t| t.span.clone());

    let mut replacements = vec![(block.clone(), BLOCK_MARKER)];
    if let Some(title) = &title {
        replacements.push((title.clone(), TITLE_MARKER));
    }
    replacements.sort_by_key(|(range, _)| range.start);

    let mut skeleton = String::with_capacity(template.len());
    let mut pos = 0;
    for (range, marker) in &replacements {
        skeleton.push_str(&template[pos..range.start]);
        skeleton.push_str(marker);
        pos = range.end;
    }
    skeleton.push_str(&template[pos..]);

    let block_template = &template[block];
    let blocks: Vec<String> = episodes
        .iter()
        .map(|ep| {
            let ctx = episode_context(composer, show, ep, video);
            composer.render(block_template, &ctx)
        })
        .collect();

    let mut name = composer
        .render(&skeleton, &first_ctx)
        .replace(BLOCK_MARKER, &blocks.join(" "));

    if let Some(title) = title {
        let title_template = &template[title];
        let titles: Vec<String> = episodes
            .iter()
            .map(|ep| {
                let ctx = episode_context(composer, show, ep, video);
                composer.render(title_template, &ctx)
            })
            .filter(|t| !t.is_empty())
            .collect();
        name = name.replace(TITLE_MARKER, &titles.join(" - "));
    }

    composer.finish(&name)
}
