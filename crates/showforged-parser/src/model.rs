//! Detection result types.

use chrono::NaiveDate;
use std::fmt;

/// Season and episode numbers recognized in one file name.
///
/// `season` is `-1` when no season could be determined. `episodes` is sorted
/// ascending and free of duplicates; it is empty when nothing was recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeMatchingResult {
    /// Season number, or `-1`.
    pub season: i32,
    /// Episode numbers, ascending.
    pub episodes: Vec<i32>,
    /// The normalized file name stem that was searched.
    pub name: String,
    /// `name` with the season/episode markers removed.
    pub cleaned_name: String,
    /// Air date, when the file name carried a date instead of an episode number.
    pub date: Option<NaiveDate>,
    /// Whether the file name carries a stacking marker (`cd1`, `part2`, ...).
    pub stacking_marker_found: bool,
}

impl Default for EpisodeMatchingResult {
    fn default() -> Self {
        Self {
            season: -1,
            episodes: Vec::new(),
            name: String::new(),
            cleaned_name: String::new(),
            date: None,
            stacking_marker_found: false,
        }
    }
}

impl EpisodeMatchingResult {
    /// Whether a season number was found.
    pub fn has_season(&self) -> bool {
        self.season >= 0
    }

    /// Whether at least one episode number was found.
    pub fn has_episodes(&self) -> bool {
        !self.episodes.is_empty()
    }

    /// Whether this is a multi-episode file.
    pub fn is_multi_episode(&self) -> bool {
        self.episodes.len() > 1
    }

    pub(crate) fn add_episode(&mut self, episode: i32) -> bool {
        if episode > 0 && !self.episodes.contains(&episode) {
            tracing::trace!(episode, "add found episode");
            self.episodes.push(episode);
            true
        } else {
            false
        }
    }
}

/// Compact form used in logs and fixtures: `S:1 E:2 E:3 Split`.
impl fmt::Display for EpisodeMatchingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S:{}", self.season)?;
        for episode in &self.episodes {
            write!(f, " E:{}", episode)?;
        }
        if self.stacking_marker_found {
            write!(f, " Split")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let result = EpisodeMatchingResult::default();
        assert_eq!(result.season, -1);
        assert!(!result.has_season());
        assert!(!result.has_episodes());
        assert_eq!(result.to_string(), "S:-1");
    }

    #[test]
    fn test_add_episode_rejects_zero_and_duplicates() {
        let mut result = EpisodeMatchingResult::default();
        assert!(result.add_episode(2));
        assert!(!result.add_episode(2));
        assert!(!result.add_episode(0));
        assert!(result.add_episode(3));
        assert!(result.is_multi_episode());
        assert_eq!(result.to_string(), "S:-1 E:2 E:3");
    }
}
