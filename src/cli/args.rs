//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::application::TreeStyle;

/// Design pattern showcase: lazy singleton, prototype tree, functional options, abstract factory
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Access the lazy singleton from concurrent callers
    Singleton {
        /// Number of concurrent callers (default: from settings)
        #[arg(long)]
        callers: Option<usize>,
    },

    /// Print a folder tree and its deep clone
    Prototype {
        /// Spaces per nesting level (default: from settings)
        #[arg(long)]
        indent: Option<usize>,

        /// Rendering style (default: from settings)
        #[arg(long, value_enum)]
        style: Option<TreeStyle>,
    },

    /// Build a config from functional options
    Options {
        #[arg(long, default_value = "Some addr")]
        addr: String,

        #[arg(long, default_value = "db uri")]
        db_uri: String,

        /// Timeout in seconds
        #[arg(long)]
        timeout: Option<i64>,

        #[arg(long)]
        log_file: Option<String>,
    },

    /// Create customers and sellers from auth providers
    Factory {
        /// Provider names (default: from settings)
        providers: Vec<String>,
    },

    /// Run every demonstration with section banners
    All,

    /// Show effective settings as TOML
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
