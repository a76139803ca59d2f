use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showforged")]
#[command(author, version, about = "TV episode detection and rename planning")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect season and episode numbers in file names
    Detect {
        /// File names or paths relative to the show folder
        names: Vec<String>,

        /// Show title, removed from names before detection
        #[arg(short, long, default_value = "")]
        show: String,

        /// Scan a show folder for video files instead of reading names
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recover the episode title from a file name
    Clean {
        /// File name to clean
        #[arg(required = true)]
        name: String,

        /// Show title, removed from the name
        #[arg(short, long, default_value = "")]
        show: String,
    },

    /// Print the rename plan for a show described in a JSON file
    Plan {
        /// JSON file with `show` and `groups`
        #[arg(required = true)]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template tokens and renderers
    Tokens,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
