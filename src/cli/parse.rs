//! CLI parse: clap types. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// vfs-index CLI - browse a directory tree through its identifier index
#[derive(Parser)]
#[command(name = "vfs-index")]
#[command(about = "Index a directory tree and look nodes up by identifier path")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root directory to index
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a directory by identifier path (root when empty)
    Ls {
        /// Identifiers from the root's child down to the directory
        ids: Vec<String>,
        /// Address by `/`-separated names instead of identifiers
        #[arg(long, conflicts_with = "ids")]
        path: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a file's content by identifier path
    Cat {
        /// Identifiers from the root's child down to the file
        ids: Vec<String>,
        /// Address by `/`-separated names instead of identifiers
        #[arg(long, conflicts_with = "ids")]
        path: Option<String>,
    },
    /// Print the whole indexed tree
    Tree {
        /// Show each node's full key
        #[arg(long)]
        keys: bool,
    },
    /// Show index counts
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the identifier of a segment name
    Id {
        segment: String,
    },
}

/// Rendering of `ls` and `stats` results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
