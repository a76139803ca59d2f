//! Shared fixtures for integration tests.
//!
//! Builds the shows and episode file groups used by the composer and CLI
//! tests, and a [`TestHarness`] holding an engine plus settings.

#![allow(dead_code)]

use showforged::config::RenamerSettings;
use showforged::model::{Episode, EpisodeFileGroup, MediaFile, TvShow};
use showforged::{Composer, TemplateEngine};

/// Settings using the legacy `$X` patterns of older configurations.
pub fn legacy_settings() -> RenamerSettings {
    RenamerSettings {
        show_folder_pattern: "$N ($Y)".to_string(),
        season_folder_pattern: "Season $1".to_string(),
        file_pattern: "$N - S$2E$E - $T".to_string(),
        ..Default::default()
    }
}

/// A show living at `/tv/<title>`.
pub fn show(title: &str, year: i32) -> TvShow {
    TvShow {
        data_source: "/tv".to_string(),
        path: format!("/tv/{}", title),
        ..TvShow::new(title, Some(year))
    }
}

/// A group of files for the given episodes.
pub fn group(episodes: Vec<Episode>, files: &[&str]) -> EpisodeFileGroup {
    EpisodeFileGroup::new(episodes, files.iter().map(|f| MediaFile::new(*f)).collect())
}

/// Engine plus settings, composing plans.
pub struct TestHarness {
    pub engine: TemplateEngine,
    pub settings: RenamerSettings,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_settings(RenamerSettings::default())
    }

    pub fn with_settings(settings: RenamerSettings) -> Self {
        Self {
            engine: TemplateEngine::new(),
            settings,
        }
    }

    pub fn composer(&self) -> Composer<'_> {
        Composer::new(&self.engine, &self.settings)
    }

    /// Targets of a plan as `show folder/target` strings.
    pub fn targets(&self, show: &TvShow, group: &EpisodeFileGroup) -> Vec<String> {
        let plan = self
            .composer()
            .compose(show, group)
            .expect("plan should compose");
        plan.renames
            .iter()
            .map(|r| format!("{}/{}", plan.show_folder, r.target))
            .collect()
    }
}
