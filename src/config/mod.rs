mod types;

pub use types::*;

use crate::compose::check_patterns;
use crate::template::TemplateEngine;
use anyhow::{Context, Result};
use std::path::Path;

/// Characters a space replacement must not contain.
const ILLEGAL_REPLACEMENT: &[char] = &['"', '\\', ':', '<', '>', '|', '/', '?', '*'];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./showforged.toml",
        "./config.toml",
        "~/.config/showforged/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let renamer = &config.renamer;

    if renamer.file_pattern.trim().is_empty() {
        anyhow::bail!("Renamer file pattern cannot be empty");
    }

    if renamer.space_substitution && renamer.space_replacement.contains(ILLEGAL_REPLACEMENT) {
        anyhow::bail!(
            "Space replacement '{}' contains characters not allowed in file names",
            renamer.space_replacement
        );
    }

    if renamer.thumb_naming.is_empty() {
        tracing::warn!("No thumb naming configured, episode thumbs will not be renamed");
    }

    for warning in check_patterns(&renamer.season_folder_pattern, &renamer.file_pattern) {
        tracing::warn!("Renamer pattern is not recommended: {}", warning);
    }

    let engine = TemplateEngine::new();
    for pattern in [
        &renamer.show_folder_pattern,
        &renamer.season_folder_pattern,
        &renamer.file_pattern,
    ] {
        for token in engine.unknown_tokens(pattern) {
            tracing::warn!("Unknown token '{}' in renamer pattern {:?}", token, pattern);
        }
    }

    Ok(())
}
