//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - fetch: pull navigation entries from the registry
//! - normalize: normalize a JSON list of entries from a file or stdin

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// navtools - external tool links for a site navigation header
#[derive(Parser, Debug)]
#[command(name = "navtools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch navigation entries from the configured registry
    Fetch {
        /// Print entries as fetched, without normalization
        #[arg(long)]
        raw: bool,

        /// Override the configured account id
        #[arg(short, long)]
        account: Option<String>,

        /// Override the configured user id
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Normalize a JSON array of entries
    Normalize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}
