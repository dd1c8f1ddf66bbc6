//! Scanner module - Classify a build log against the rule set
//!
//! [`Scanner::scan`] is a pure function of the log text and the rule set it
//! owns: rules are tried in priority order, the first one that matches wins,
//! and its snippet is bounded by [`SnippetLimits`] before it is returned.

mod source;

use tracing::{debug, trace};

pub use source::LogSource;

use crate::rules::{Detection, RuleSet, ScanResult};
use crate::utils::truncate::{truncate_lines_count, truncate_lines_width, MIN_LINE_WIDTH};

/// Default number of snippet lines kept before the `...` marker
pub const DEFAULT_MAX_LINES: usize = 30;

/// Default snippet line width, in characters
pub const DEFAULT_MAX_WIDTH: usize = 160;

/// Bounds applied to every snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetLimits {
    /// Lines kept before the `...` marker line
    pub max_lines: usize,
    /// Maximum characters per line, at least [`MIN_LINE_WIDTH`]
    pub max_width: usize,
}

impl Default for SnippetLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl SnippetLimits {
    /// Bound `snippet` by line count, then by line width
    pub fn apply(&self, snippet: &str) -> String {
        truncate_lines_width(
            &truncate_lines_count(snippet, self.max_lines),
            self.max_width.max(MIN_LINE_WIDTH),
        )
    }
}

/// Build log classifier
///
/// # Examples
///
/// ```rust
/// use bambot::rules::{RuleSet, ScanResult};
/// use bambot::scanner::Scanner;
///
/// let scanner = Scanner::new(RuleSet::builtin().unwrap());
///
/// assert_eq!(scanner.scan(""), ScanResult::non_match());
///
/// let result = scanner.scan("step 1\nFATAL: disk full\n");
/// assert_eq!(result.comment(), "Bambot detected an error!");
/// assert_eq!(result.snippet(), "FATAL: disk full\n");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    rules: RuleSet,
    limits: SnippetLimits,
}

impl Scanner {
    /// Create a scanner over `rules` with default snippet limits
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            limits: SnippetLimits::default(),
        }
    }

    /// Replace the snippet limits
    pub fn with_limits(mut self, limits: SnippetLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn limits(&self) -> SnippetLimits {
        self.limits
    }

    /// Classify `log_text`.
    ///
    /// Every input is valid. The first rule in priority order that finds its
    /// signature wins; if none does, the result is [`ScanResult::non_match`].
    pub fn scan(&self, log_text: &str) -> ScanResult {
        for rule in self.rules.iter() {
            let Some(region) = rule.find(log_text) else {
                trace!(rule = rule.name(), "No match");
                continue;
            };

            debug!(
                rule = rule.name(),
                snippet_bytes = region.len(),
                "Rule matched"
            );
            return ScanResult::Matched(Detection::from_rule(rule, self.limits.apply(region)));
        }

        debug!(log_bytes = log_text.len(), "No rule matched");
        ScanResult::non_match()
    }
}
