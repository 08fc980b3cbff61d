//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// cardprep - normalize Markdown notes for flashcard extraction
#[derive(Parser, Debug)]
#[command(name = "cardprep", author, version)]
#[command(about = "Normalize Markdown notes for flashcard extraction", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CARDPREP_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize notes in place
    Run(RunArgs),
    /// Report whether notes are in scope
    Scope(ScopeArgs),
    /// Configuration file operations
    Config {
        /// Operation to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `cardprep run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Vault root; scope patterns match paths relative to it
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Print transformed notes instead of writing them
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit non-zero if any note would change; write nothing
    #[arg(long)]
    pub check: bool,

    /// Notes to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `cardprep scope`.
#[derive(Args, Debug)]
pub struct ScopeArgs {
    /// Vault root; scope patterns match paths relative to it
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Notes to test
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// `cardprep config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `scope.mode`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value; `true`/`false`, numbers, and `[...]` arrays are typed
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file instead of the resolved path
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
