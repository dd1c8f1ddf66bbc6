//! CLI commands module

pub mod rules;
pub mod scan;

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::BambotError;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Log files to classify (`-` or nothing reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format (terminal, json, markdown)
    #[arg(short, long, default_value = "terminal")]
    pub format: ScanFormat,

    /// Snippet lines kept before the `...` marker
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Maximum characters per snippet line (at least 4)
    #[arg(long, value_name = "N")]
    pub max_width: Option<usize>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: RulesFormat,
}

/// Output format for scan command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScanFormat {
    Terminal,
    Json,
    Markdown,
}

/// Output format for rules command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RulesFormat {
    Terminal,
    Json,
}

/// Load the configuration named on the command line, or `.bambot.toml`
pub fn load_config(path: Option<&Path>) -> Result<Config, BambotError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_or_default(),
    }
}

/// Write `content` to `output`, or to stdout when no file is given
pub fn write_output(content: &str, output: Option<&Path>) -> Result<(), BambotError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| BambotError::OutputWrite {
            path: path.display().to_string(),
            source: e,
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
