//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;
use crate::domain::{AbsencePolicy, DocumentFormat};

/// Resolve dot-separated key paths against nested JSON/TOML documents
#[derive(Parser, Debug)]
#[command(name = "dotget")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory holding .dotget.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at each path (exit 1 if any path is absent)
    Get {
        /// Document to read, `-` for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Dot-separated paths, e.g. user.address.street
        #[arg(required = true)]
        paths: Vec<String>,

        /// Input format (default: from file extension, then config)
        #[arg(short, long)]
        format: Option<DocumentFormat>,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Run the sample lookups against the built-in user record
    Demo {
        #[command(flatten)]
        lookup: LookupArgs,
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

/// Options shared by commands that resolve paths.
#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    /// When to report absence: falsy | missing
    #[arg(short, long)]
    pub policy: Option<AbsencePolicy>,

    /// Result rendering: plain | json
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file locations
    Path,
    /// Print a commented template config
    Template,
}
