//! Season folder of an existing show layout.

use crate::compose::Composer;
use crate::model::{Episode, TvShow};
use std::collections::HashMap;

/// Season folder for `season` of `show`.
///
/// When more than half of the season's episodes already live in the same
/// top-level folder below the show folder, that folder is kept. Otherwise the
/// season folder pattern is rendered for the season's first episode.
pub fn detect_season_folder(composer: &Composer<'_>, show: &TvShow, season: i32) -> String {
    let episodes: Vec<&Episode> = show
        .episodes
        .iter()
        .filter(|ep| ep.season == season)
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for episode in &episodes {
        let folder = episode
            .path
            .split(['/', '\\'])
            .find(|c| !c.is_empty())
            .unwrap_or("");
        *counts.entry(folder).or_default() += 1;
    }

    let majority = counts
        .into_iter()
        .filter(|(folder, _)| !folder.is_empty())
        .find(|(_, count)| count * 2 > episodes.len());
    if let Some((folder, count)) = majority {
        tracing::debug!(season, folder, count, "keeping existing season folder");
        return folder.to_string();
    }

    match episodes.iter().min_by_key(|ep| ep.episode) {
        Some(first) => composer.season_folder(show, first),
        None => composer.season_folder(show, &Episode::new(season, 0, "")),
    }
}
