//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Stage LaTeX document folders and batch-compile them with `XeLaTeX`.
#[derive(Debug, Parser)]
#[command(name = "texbatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Common options for a build run.
    #[command(flatten)]
    pub build: BuildArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create a default configuration file.
    Init,
    /// Display the resolved configuration.
    Show,
    /// Print the configuration file path.
    Path,
}

/// Arguments for a build run.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Root directory containing document-unit subfolders.
    #[arg(short, long, env = "TEXBATCH_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Build output directory under which the staging tree is placed.
    #[arg(short, long, env = "TEXBATCH_BUILD_DIR")]
    pub build_dir: Option<PathBuf>,

    /// Name of the staging subdirectory inside the build directory.
    #[arg(long, env = "TEXBATCH_OUTPUT_NAME")]
    pub output_name: Option<String>,

    /// Typesetting command name or path.
    #[arg(short = 'x', long, env = "TEXBATCH_COMMAND")]
    pub command: Option<String>,

    /// Document file extension, including the leading dot.
    #[arg(short, long, env = "TEXBATCH_EXTENSION")]
    pub extension: Option<String>,

    /// Per-unit timeout in seconds (default: wait indefinitely).
    #[arg(long, env = "TEXBATCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Process every unit and report all failures instead of stopping at the
    /// first failing unit.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Path to the configuration file (default: ./texbatch.toml).
    #[arg(short, long, env = "TEXBATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
