//! # CLI Module
//!
//! This module defines the command-line interface for Bambot using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Classify one or more build logs |
//! | `rules` | List the rule table in priority order |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Output formatters (Terminal, JSON, Markdown issue comment)
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file (defaults to `.bambot.toml`)
//!
//! ## Examples
//!
//! ```bash
//! # Classify a CI log
//! bambot scan build.log
//!
//! # Render the issue comment for a log piped on stdin
//! curl -s "$CI_LOG_URL" | bambot scan --format markdown
//!
//! # Show every rule
//! bambot rules
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{RulesArgs, ScanArgs};

/// Bambot - Detect known failure signatures in CI build logs
#[derive(Parser, Debug)]
#[command(name = "bambot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "BAMBOT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify build logs and print the detected failure
    Scan(ScanArgs),

    /// List the failure signatures in priority order
    Rules(RulesArgs),
}
