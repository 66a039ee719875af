//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Movie catalog on an ordered search tree: load, query, inspect
#[derive(Parser, Debug)]
#[command(name = "movlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a catalog and report record counts
    Load {
        /// Tab-separated catalog file or directory (default: configured catalog)
        #[arg(value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// Look up a movie by title
    Search {
        /// Movie title
        title: String,
        /// Catalog file or directory
        #[arg(short, long, value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// Remove a title and show the remaining catalog
    Remove {
        /// Movie title
        title: String,
        /// Catalog file or directory
        #[arg(short, long, value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// List titles in order
    List {
        /// Catalog file or directory
        #[arg(value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// Show the search tree structure
    Tree {
        /// Catalog file or directory
        #[arg(value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// Show catalog size and tree height
    Stats {
        /// Catalog file or directory
        #[arg(value_hint = ValueHint::AnyPath)]
        source: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
