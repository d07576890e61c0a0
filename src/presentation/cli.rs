//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Node paths are the displayed tree paths, e.g. `albums/2019` or `x/y/1.mp3`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sharetree - browse a peer's file index and pick files to download
#[derive(Parser, Debug)]
#[command(name = "sharetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.config/sharetree/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the index tree with sizes and selection state
    Show {
        /// Index snapshot (JSON)
        index: PathBuf,

        /// Select the subtree at this node path, as printed by `show` (repeatable)
        #[arg(short, long = "select", value_name = "NODE_PATH")]
        select: Vec<String>,

        /// Levels to expand (overrides browse.expand_depth)
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Build a download request from a selection
    Request {
        /// Index snapshot (JSON)
        index: PathBuf,

        /// Select the subtree at this node path, as printed by `show` (repeatable)
        #[arg(short, long = "select", value_name = "NODE_PATH")]
        select: Vec<String>,

        /// Write the request to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pick files interactively, then emit the download request
    Browse {
        /// Index snapshot (JSON)
        index: PathBuf,

        /// Write the request to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Levels to expand initially (overrides browse.expand_depth)
        #[arg(short, long)]
        depth: Option<usize>,
    },
}
