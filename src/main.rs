mod cli;

use showforged::{
    config,
    model::{EpisodeFileGroup, TvShow},
    Composer, RenameOp, RenamePlan, TemplateEngine,
};
use showforged_common::paths;
use showforged_parser::{EpisodeDetector, EpisodeMatchingResult};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// Input of the `plan` command.
#[derive(Debug, Deserialize)]
struct PlanInput {
    show: TvShow,
    #[serde(default)]
    groups: Vec<EpisodeFileGroup>,
}

#[derive(Debug, Serialize)]
struct DetectRow {
    input: String,
    title: String,
    #[serde(flatten)]
    result: EpisodeMatchingResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "showforged=trace,showforged_parser=trace,showforged_common=debug".to_string()
        } else {
            "showforged=info,showforged_parser=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Detect {
            names,
            show,
            dir,
            json,
        } => detect(&names, &show, dir.as_deref(), json, cli.config.as_deref()),
        Commands::Clean { name, show } => clean(&name, &show, cli.config.as_deref()),
        Commands::Plan { input, json } => plan(&input, json, cli.config.as_deref()),
        Commands::Tokens => list_tokens(),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("showforged {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn detector(config_path: Option<&Path>) -> Result<EpisodeDetector> {
    let config = config::load_config_or_default(config_path)?;
    Ok(EpisodeDetector::new(config.renamer.detector_config()))
}

/// Video files below `dir`, relative to it, with `/` separators.
fn scan_videos(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        anyhow::bail!("Directory does not exist: {:?}", dir);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan directory: {:?}", dir))?;
        if !entry.file_type().is_file() || !paths::is_video_file(entry.path()) {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let components: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        files.push(components.join("/"));
    }

    tracing::info!("Found {} video files in {:?}", files.len(), dir);
    Ok(files)
}

fn detect(
    names: &[String],
    show: &str,
    dir: Option<&Path>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let detector = detector(config_path)?;

    let inputs = match dir {
        Some(dir) => scan_videos(dir)?,
        None => names.to_vec(),
    };
    if inputs.is_empty() {
        anyhow::bail!("Nothing to detect: pass file names or --dir");
    }

    let rows: Vec<DetectRow> = inputs
        .par_iter()
        .map(|input| DetectRow {
            input: input.clone(),
            title: detector.clean_title(paths::file_name(input), show),
            result: detector.detect_from_relative_path(input, show),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}\t{}\t{}", row.input, row.result, row.title);
        }
    }

    Ok(())
}

fn clean(name: &str, show: &str, config_path: Option<&Path>) -> Result<()> {
    let detector = detector(config_path)?;
    println!("{}", detector.clean_title(name, show));
    Ok(())
}

fn plan(input: &Path, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read plan input: {:?}", input))?;
    let input: PlanInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse plan input: {:?}", input))?;

    let engine = TemplateEngine::new();
    let composer = Composer::new(&engine, &config.renamer);

    let plans = input
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            composer
                .compose(&input.show, group)
                .with_context(|| format!("Failed to plan file group {}", i + 1))
        })
        .collect::<Result<Vec<RenamePlan>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    let show_folder = composer.show_folder(&input.show);
    println!("Show folder: {}", show_folder);
    if let Some(first) = plans.first() {
        for warning in &first.warnings {
            println!("  warning: {}", warning);
        }
    }
    for plan in &plans {
        for rename in &plan.renames {
            let op = match rename.op {
                RenameOp::Move => "",
                RenameOp::Copy => " [copy]",
                RenameOp::MoveDirectory => " [dir]",
            };
            println!("  {} -> {}{}", rename.source, rename.target, op);
        }
    }

    Ok(())
}

fn list_tokens() -> Result<()> {
    let engine = TemplateEngine::new();

    println!("Tokens:");
    for name in engine.token_names() {
        println!("  ${{{}}}", name);
    }

    println!("\nRenderers:");
    for name in engine.renderer_names() {
        println!("  {}", name);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Show folder: {}", config.renamer.show_folder_pattern);
            println!("  Season folder: {}", config.renamer.season_folder_pattern);
            println!("  File: {}", config.renamer.file_pattern);
            println!("  Bad words: {}", config.renamer.bad_words.len());
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  File: {}", config.renamer.file_pattern);
        }
    }

    Ok(())
}
