//! Showforged-Common: Shared types, errors, and path utilities.
//!
//! This crate provides common functionality used across showforged:
//!
//! - **Core Types**: Enums for media file roles and media sources
//! - **Path Utilities**: Separator agnostic file name helpers and file type checks
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use showforged_common::{Error, MediaFileType, Result};
//! use showforged_common::paths::{base_name, is_video_file};
//! use std::path::Path;
//!
//! assert!(is_video_file(Path::new("Show.S01E01.mkv")));
//! assert_eq!(base_name("Show/Show.S01E01.mkv"), "Show.S01E01");
//! assert_eq!(MediaFileType::from_file_name("Show.S01E01.nfo"), MediaFileType::Nfo);
//!
//! fn example() -> Result<()> {
//!     Err(Error::incomplete("show has no title"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
