//! Rename planning.
//!
//! The composer renders the show folder, the season folder and the base name
//! of an episode from the renamer settings and derives the new name of every
//! file of the episode from it. Nothing here touches the file system: the
//! result is a [`RenamePlan`] of relative source and target paths that the
//! caller carries out.

mod multi;
mod naming;
mod recommend;

pub use recommend::{check_patterns, is_recommended, PatternWarning};

use crate::config::RenamerSettings;
use crate::model::{Episode, EpisodeFileGroup, MediaFile, TvShow};
use crate::sanitize::{clean_token_value, finish_name};
use crate::template::{parse, parsed_tokens, translate_legacy, TemplateEngine, TokenContext};
use serde::Serialize;
use showforged_common::{paths, Error, Result};
use showforged_parser::stacking;

/// Tokens carrying a season number.
pub const SEASON_TOKENS: &[&str] = &[
    "seasonNr",
    "seasonNr2",
    "seasonNrDvd",
    "seasonNrDvd2",
    "episode.season",
    "episode.dvdSeason",
];

/// Tokens carrying an episode number.
pub const EPISODE_TOKENS: &[&str] = &[
    "episodeNr",
    "episodeNr2",
    "episodeNrDvd",
    "episodeNrDvd2",
    "episode.episode",
    "episode.dvdEpisode",
];

/// Tokens carrying the episode title.
pub const TITLE_TOKENS: &[&str] = &["title", "episode.title"];

/// How a planned rename is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameOp {
    /// Move the file.
    Move,
    /// Write a copy under the new name and keep the source until cleanup.
    Copy,
    /// Move a whole disc folder (`VIDEO_TS`/`BDMV` parent).
    MoveDirectory,
}

/// One source to target pair, both relative to the show folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub source: String,
    pub target: String,
    pub op: RenameOp,
}

/// Everything needed to rename one episode file group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    /// New name of the show folder.
    pub show_folder: String,
    /// Season folder relative to the show folder, may be empty.
    pub season_folder: String,
    pub renames: Vec<PlannedRename>,
    /// Advisory findings about the configured patterns.
    pub warnings: Vec<PatternWarning>,
}

/// Renders names from renamer settings.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    pub(crate) engine: &'a TemplateEngine,
    pub(crate) settings: &'a RenamerSettings,
}

impl<'a> Composer<'a> {
    pub fn new(engine: &'a TemplateEngine, settings: &'a RenamerSettings) -> Self {
        Self { engine, settings }
    }

    pub(crate) fn context<'s>(&'s self, show: &'s TvShow) -> TokenContext<'s> {
        TokenContext::for_show(show).with_title_prefixes(&self.settings.title_prefixes)
    }

    /// Render with illegal characters removed from token values.
    pub(crate) fn render(&self, template: &str, ctx: &TokenContext<'_>) -> String {
        self.engine.render_with(template, ctx, clean_token_value)
    }

    pub(crate) fn finish(&self, name: &str) -> String {
        finish_name(
            name,
            self.settings.ascii_replacement,
            self.settings.space_replacement(),
        )
    }

    /// New show folder name; the current one when the template is blank or
    /// renders empty.
    pub fn show_folder(&self, show: &TvShow) -> String {
        let pattern = &self.settings.show_folder_pattern;
        if pattern.trim().is_empty() {
            return show.folder_name().to_string();
        }

        let name = self.finish(&self.render(pattern, &self.context(show)));
        if name.is_empty() {
            tracing::warn!(
                show = show.title.as_str(),
                "show folder pattern rendered empty, keeping current folder"
            );
            show.folder_name().to_string()
        } else {
            name
        }
    }

    /// Season folder of `episode`, relative to the show folder.
    ///
    /// When the template renders blank, `Season <n>` is used unless the file
    /// pattern carries the season number itself.
    pub fn season_folder(&self, show: &TvShow, episode: &Episode) -> String {
        let ctx = self.context(show).with_episode(episode);
        let name = self.finish(&self.render(&self.settings.season_folder_pattern, &ctx));
        if !name.is_empty() || has_token(&self.settings.file_pattern, SEASON_TOKENS) {
            return name;
        }
        self.finish(&format!("Season {}", episode.season))
    }

    /// Base name of an episode file, without stacking marker or extension.
    pub fn base_name(&self, show: &TvShow, episodes: &[&Episode], video: Option<&MediaFile>) -> String {
        multi::render_base_name(self, show, episodes, video)
    }

    /// Plan the renames of one episode file group.
    pub fn compose(&self, show: &TvShow, group: &EpisodeFileGroup) -> Result<RenamePlan> {
        if self.settings.file_pattern.trim().is_empty() {
            return Err(Error::invalid_template("file pattern is empty"));
        }
        if show.title.trim().is_empty() {
            return Err(Error::incomplete("show has no title"));
        }
        if group.episodes.is_empty() {
            return Err(Error::incomplete("file group has no episodes"));
        }
        if let Some(ep) = group.episodes.iter().find(|ep| ep.season < 0 || ep.episode < 0) {
            return Err(Error::incomplete(format!(
                "invalid episode number S{}E{} for '{}'",
                ep.season, ep.episode, ep.title
            )));
        }

        let mut episodes: Vec<&Episode> = group.episodes.iter().collect();
        episodes.sort_by_key(|ep| (ep.season, ep.episode));
        episodes.dedup_by_key(|ep| (ep.season, ep.episode));
        let first = episodes[0];

        let warnings = check_patterns(
            &self.settings.season_folder_pattern,
            &self.settings.file_pattern,
        );
        for warning in &warnings {
            tracing::warn!(show = show.title.as_str(), "{}", warning);
        }

        let video = group.main_video();
        let base = self.base_name(show, &episodes, video);
        if base.is_empty() {
            return Err(Error::incomplete(format!(
                "file pattern rendered an empty name for S{}E{} of '{}'",
                first.season, first.episode, show.title
            )));
        }

        let season_folder = self.season_folder(show, first);
        let mut plan = RenamePlan {
            show_folder: self.show_folder(show),
            season_folder: season_folder.clone(),
            renames: Vec::new(),
            warnings,
        };

        let mut disc_folders: Vec<&str> = Vec::new();
        for file in group.files.iter().filter(|file| file.is_disc_file()) {
            let folder = disc_episode_folder(&file.path).ok_or_else(|| {
                Error::invalid_input(format!(
                    "disc file '{}' is not inside a VIDEO_TS or BDMV folder of an episode folder",
                    file.path
                ))
            })?;
            if disc_folders.contains(&folder) {
                continue;
            }
            let marker = stacking::folder_stacking_marker(paths::file_name(folder));
            let name = if marker.is_empty() {
                base.clone()
            } else {
                format!("{}.{}", base, marker)
            };
            push_rename(
                &mut plan.renames,
                folder,
                join(&season_folder, &name),
                RenameOp::MoveDirectory,
            )?;
            disc_folders.push(folder);
        }

        for file in &group.files {
            if disc_folders.iter().any(|folder| is_inside(&file.path, folder)) {
                continue;
            }
            for (name, op) in naming::target_names(file, &base, video, &self.settings.thumb_naming)
            {
                push_rename(&mut plan.renames, &file.path, join(&season_folder, &name), op)?;
            }
        }

        tracing::debug!(
            show = show.title.as_str(),
            season = first.season,
            episode = first.episode,
            episodes = episodes.len(),
            renames = plan.renames.len(),
            "composed rename plan"
        );

        Ok(plan)
    }
}

/// Plan the renames of one episode file group.
pub fn compose(
    engine: &TemplateEngine,
    settings: &RenamerSettings,
    show: &TvShow,
    group: &EpisodeFileGroup,
) -> Result<RenamePlan> {
    Composer::new(engine, settings).compose(show, group)
}

fn has_token(pattern: &str, names: &[&str]) -> bool {
    let template = translate_legacy(pattern);
    let segments = parse(&template);
    let found = parsed_tokens(&segments).any(|t| names.contains(&t.name));
    found
}

fn join(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|c| !c.is_empty())
}

/// Folder holding the `VIDEO_TS`/`BDMV` folder of a disc file.
fn disc_episode_folder(path: &str) -> Option<&str> {
    let mut offset = 0;
    for component in path.split(['/', '\\']) {
        if component.eq_ignore_ascii_case("VIDEO_TS") || component.eq_ignore_ascii_case("BDMV") {
            let folder = path[..offset].trim_end_matches(['/', '\\']);
            return (!folder.is_empty()).then_some(folder);
        }
        offset += component.len() + 1;
    }
    None
}

fn is_inside(path: &str, folder: &str) -> bool {
    let mut path = components(path);
    components(folder).all(|c| path.next() == Some(c))
}

fn push_rename(
    renames: &mut Vec<PlannedRename>,
    source: &str,
    target: String,
    op: RenameOp,
) -> Result<()> {
    if let Some(existing) = renames.iter().find(|r| r.target == target) {
        return Err(Error::invalid_input(format!(
            "'{}' and '{}' would both be renamed to '{}'",
            existing.source, source, target
        )));
    }
    if source == target {
        tracing::trace!(source, "already named correctly");
        return Ok(());
    }
    renames.push(PlannedRename {
        source: source.to_string(),
        target,
        op,
    });
    Ok(())
}
