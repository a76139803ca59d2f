//! Configuration loading tests.

use showforged::config::{load_config, load_config_or_default, Config, ThumbNaming};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("showforged.toml");
    fs::write(
        &path,
        r#"
[renamer]
show_folder_pattern = "$N"
season_folder_pattern = "S$2"
file_pattern = "$N $1x$E $T"
ascii_replacement = true
space_substitution = true
space_replacement = "."
thumb_naming = ["filename-thumb", "filename"]
bad_words = ["GRP", "x264"]
title_prefixes = ["The"]
resolve_disc_files = false
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    let renamer = &config.renamer;
    assert_eq!(renamer.show_folder_pattern, "$N");
    assert_eq!(renamer.file_pattern, "$N $1x$E $T");
    assert!(renamer.ascii_replacement);
    assert_eq!(renamer.space_replacement(), Some("."));
    assert_eq!(
        renamer.thumb_naming,
        vec![ThumbNaming::FilenameThumb, ThumbNaming::Filename]
    );
    assert_eq!(renamer.title_prefixes, vec!["The".to_string()]);

    let detector = renamer.detector_config();
    assert_eq!(detector.bad_words, vec!["GRP".to_string(), "x264".to_string()]);
    assert!(!detector.resolve_disc_files);
}

#[test]
fn test_missing_fields_use_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[renamer]\nfile_pattern = \"$N - $1x$E\"\n").unwrap();

    let config = load_config(&path).unwrap();
    let defaults = Config::default().renamer;
    assert_eq!(config.renamer.file_pattern, "$N - $1x$E");
    assert_eq!(config.renamer.season_folder_pattern, defaults.season_folder_pattern);
    assert_eq!(config.renamer.title_prefixes, defaults.title_prefixes);
    assert_eq!(config.renamer.space_replacement(), None);
    assert!(config.renamer.resolve_disc_files);
}

#[test]
fn test_empty_file_pattern_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[renamer]\nfile_pattern = \"\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("file pattern"));
}

#[test]
fn test_illegal_space_replacement_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[renamer]\nspace_substitution = true\nspace_replacement = \"/\"\n",
    )
    .unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn test_unrecommended_pattern_is_accepted() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[renamer]\nfile_pattern = \"${title} ${bogus}\"\n").unwrap();

    assert!(load_config(&path).is_ok());
}

#[test]
fn test_invalid_toml() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[renamer\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_explicit_path_must_exist() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing.toml");

    let err = load_config_or_default(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
