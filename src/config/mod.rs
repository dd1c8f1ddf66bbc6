//! Configuration module
//!
//! The engine itself takes no configuration: the rule table is compiled in.
//! The CLI reads an optional `.bambot.toml` to tune snippet limits and to
//! add custom rules ahead of the generic fallback.

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

use crate::scanner::{SnippetLimits, DEFAULT_MAX_LINES, DEFAULT_MAX_WIDTH};

/// Snippet configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Lines kept before the `...` marker
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Maximum characters per snippet line
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl From<SnippetConfig> for SnippetLimits {
    fn from(config: SnippetConfig) -> Self {
        Self {
            max_lines: config.max_lines,
            max_width: config.max_width,
        }
    }
}
