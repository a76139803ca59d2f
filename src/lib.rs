//! Showforged - TV episode detection and rename planning
//!
//! This library crate exposes the template engine, the rename composer and
//! the settings they run on. Episode detection lives in `showforged-parser`.

pub mod compose;
pub mod config;
pub mod model;
pub mod sanitize;
pub mod season_folder;
pub mod template;

pub use compose::{compose, Composer, PlannedRename, RenameOp, RenamePlan};
pub use config::RenamerSettings;
pub use template::{TemplateEngine, TokenContext};
