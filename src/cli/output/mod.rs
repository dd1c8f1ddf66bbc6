//! Output formatting module for CLI

pub mod json;
mod markdown;
mod terminal;

pub use json::JsonOutput;
pub use markdown::MarkdownComment;
pub use terminal::TerminalOutput;

use serde::Serialize;

use crate::error::BambotError;
use crate::rules::{RuleSet, ScanResult};

/// Scan result for one log input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogReport {
    /// Where the log came from (path or `<stdin>`)
    pub source: String,

    #[serde(flatten)]
    pub result: ScanResult,
}

impl LogReport {
    pub fn new(source: impl Into<String>, result: ScanResult) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }
}

/// Trait for rendering scan reports
pub trait ReportRenderer {
    fn render_report(&self, reports: &[LogReport]) -> Result<String, BambotError>;
}

/// Trait for rendering the rule table
pub trait RulesRenderer {
    fn render_rules(&self, rules: &RuleSet) -> Result<String, BambotError>;
}
