//! Advisory check of renamer patterns.
//!
//! A pattern is recommended when the file pattern carries exactly one
//! episode token, exactly one title token, and a season number in either the
//! season folder or the file name, with the season before the episode and no
//! title in between. Anything else still renders, but multi-episode files
//! and re-detection of renamed files may not come out as expected.

use super::{EPISODE_TOKENS, SEASON_TOKENS, TITLE_TOKENS};
use crate::template::{parse, parsed_tokens, translate_legacy};
use serde::Serialize;
use std::fmt;

/// Why a pattern is not recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternWarning {
    /// The file pattern does not hold exactly one episode token.
    EpisodeTokens { found: usize },
    /// The file pattern does not hold exactly one title token.
    TitleTokens { found: usize },
    /// No season token at all, or more than one in the file pattern.
    SeasonTokens { file: usize, folder: usize },
    /// The season token comes after the episode token.
    SeasonAfterEpisode,
    /// The title token sits between the season and the episode token.
    TitleBetweenSeasonAndEpisode,
}

impl fmt::Display for PatternWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpisodeTokens { found } => write!(
                f,
                "file pattern should contain exactly one episode number token, found {}",
                found
            ),
            Self::TitleTokens { found } => write!(
                f,
                "file pattern should contain exactly one title token, found {}",
                found
            ),
            Self::SeasonTokens { file, folder } => write!(
                f,
                "a season number token is needed in the season folder or the file pattern \
                 (file: {}, folder: {})",
                file, folder
            ),
            Self::SeasonAfterEpisode => {
                write!(f, "season number token should come before the episode number")
            }
            Self::TitleBetweenSeasonAndEpisode => write!(
                f,
                "title token should not sit between the season and the episode number"
            ),
        }
    }
}

/// Token usage of one pattern.
struct TokenUsage {
    distinct: usize,
    first: Option<usize>,
}

fn usage(pattern: &str, names: &[&str]) -> TokenUsage {
    let template = translate_legacy(pattern);
    let segments = parse(&template);
    let mut found: Vec<&str> = Vec::new();
    let mut first = None;

    for token in parsed_tokens(&segments) {
        if !names.contains(&token.name) {
            continue;
        }
        if first.is_none() {
            first = Some(token.span.start);
        }
        if !found.contains(&token.name) {
            found.push(token.name);
        }
    }

    TokenUsage {
        distinct: found.len(),
        first,
    }
}

/// Check a season folder and file pattern pair.
///
/// ```
/// use showforged::compose::{check_patterns, PatternWarning};
///
/// assert!(check_patterns("Season $1", "$N - S$2E$E - $T").is_empty());
/// assert_eq!(
///     check_patterns("", "$N - $T"),
///     vec![
///         PatternWarning::EpisodeTokens { found: 0 },
///         PatternWarning::SeasonTokens { file: 0, folder: 0 },
///     ]
/// );
/// ```
pub fn check_patterns(season_pattern: &str, file_pattern: &str) -> Vec<PatternWarning> {
    let episode = usage(file_pattern, EPISODE_TOKENS);
    let season = usage(file_pattern, SEASON_TOKENS);
    let title = usage(file_pattern, TITLE_TOKENS);
    let folder_season = usage(season_pattern, SEASON_TOKENS);

    let mut warnings = Vec::new();
    if episode.distinct != 1 {
        warnings.push(PatternWarning::EpisodeTokens {
            found: episode.distinct,
        });
    }
    if title.distinct != 1 {
        warnings.push(PatternWarning::TitleTokens {
            found: title.distinct,
        });
    }
    if season.distinct > 1 || season.distinct + folder_season.distinct == 0 {
        warnings.push(PatternWarning::SeasonTokens {
            file: season.distinct,
            folder: folder_season.distinct,
        });
    }
    if !warnings.is_empty() {
        return warnings;
    }

    if let (Some(season_at), Some(episode_at)) = (season.first, episode.first) {
        if season_at > episode_at {
            warnings.push(PatternWarning::SeasonAfterEpisode);
        } else if title
            .first
            .is_some_and(|title_at| title_at > season_at && title_at < episode_at)
        {
            warnings.push(PatternWarning::TitleBetweenSeasonAndEpisode);
        }
    }
    warnings
}

/// Whether a pattern pair passes [`check_patterns`] without warnings.
pub fn is_recommended(season_pattern: &str, file_pattern: &str) -> bool {
    check_patterns(season_pattern, file_pattern).is_empty()
}
