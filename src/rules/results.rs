//! # Scan Result Structures
//!
//! This module defines the value returned by one scan of a build log.
//!
//! ## Overview
//!
//! - [`Detection`] - The comment, issue key and snippet of a matched rule
//! - [`ScanResult`] - Either a [`Detection`] or the distinguished no-match value
//!
//! ## Examples
//!
//! ```rust
//! use bambot::rules::{Detection, ScanResult};
//!
//! let result = ScanResult::Matched(
//!     Detection::new("generic", "Bambot detected an error!", "ERROR: boom")
//!         .with_issue_reference("BAM-12"),
//! );
//!
//! assert_ne!(result, ScanResult::non_match());
//! assert_eq!(result.comment(), "Bambot detected an error!");
//! assert_eq!(result.issue_reference(), Some("BAM-12"));
//! ```

use serde::{Deserialize, Serialize};

use super::rule::Rule;

/// A matched failure signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Name of the rule that matched (e.g., "java-compilation").
    pub rule: String,

    /// Comment of the matched rule, copied verbatim.
    pub comment: String,

    /// Issue tracker key of the matched rule, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_reference: Option<String>,

    /// Bounded excerpt of the log around the failure.
    pub snippet: String,
}

impl Detection {
    /// Create a new detection
    pub fn new(
        rule: impl Into<String>,
        comment: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            comment: comment.into(),
            issue_reference: None,
            snippet: snippet.into(),
        }
    }

    /// Build a detection for `rule` carrying an already bounded snippet
    pub fn from_rule(rule: &Rule, snippet: impl Into<String>) -> Self {
        Self {
            rule: rule.name().to_string(),
            comment: rule.comment().to_string(),
            issue_reference: rule.issue_reference().map(str::to_string),
            snippet: snippet.into(),
        }
    }

    /// Set the issue reference
    pub fn with_issue_reference(mut self, issue: impl Into<String>) -> Self {
        self.issue_reference = Some(issue.into());
        self
    }
}

/// Outcome of scanning one log.
///
/// `NoMatch` is a regular value, not an error: it means the log matched no
/// known failure signature. Compare against [`ScanResult::non_match`] or use
/// [`ScanResult::is_match`].
///
/// # Examples
///
/// ```rust
/// use bambot::rules::ScanResult;
///
/// let result = ScanResult::default();
/// assert_eq!(result, ScanResult::non_match());
/// assert_eq!(result.comment(), "");
/// assert_eq!(result.snippet(), "");
/// assert!(result.issue_reference().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanResult {
    /// No rule matched
    #[default]
    NoMatch,
    /// A rule matched
    Matched(Detection),
}

impl ScanResult {
    /// The canonical no-match value
    pub fn non_match() -> Self {
        Self::NoMatch
    }

    /// Check if a rule matched
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Get the detection, if any
    pub fn detection(&self) -> Option<&Detection> {
        match self {
            Self::Matched(detection) => Some(detection),
            Self::NoMatch => None,
        }
    }

    /// Name of the matched rule, empty on no match
    pub fn rule(&self) -> &str {
        self.detection().map_or("", |d| d.rule.as_str())
    }

    /// Comment of the matched rule, empty on no match
    pub fn comment(&self) -> &str {
        self.detection().map_or("", |d| d.comment.as_str())
    }

    /// Issue reference of the matched rule, `None` when absent or on no match
    pub fn issue_reference(&self) -> Option<&str> {
        self.detection().and_then(|d| d.issue_reference.as_deref())
    }

    /// Snippet of the matched rule, empty on no match
    pub fn snippet(&self) -> &str {
        self.detection().map_or("", |d| d.snippet.as_str())
    }
}

impl From<Option<Detection>> for ScanResult {
    fn from(detection: Option<Detection>) -> Self {
        detection.map_or(Self::NoMatch, Self::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::RuleDefinition;

    #[test]
    fn test_non_match_equals_default() {
        assert_eq!(ScanResult::non_match(), ScanResult::default());
        assert!(!ScanResult::non_match().is_match());
        assert!(ScanResult::non_match().detection().is_none());
    }

    #[test]
    fn test_non_match_accessors_are_empty() {
        let result = ScanResult::non_match();
        assert_eq!(result.rule(), "");
        assert_eq!(result.comment(), "");
        assert_eq!(result.snippet(), "");
        assert_eq!(result.issue_reference(), None);
    }

    #[test]
    fn test_empty_detection_is_not_non_match() {
        let result = ScanResult::Matched(Detection::new("", "", ""));
        assert_ne!(result, ScanResult::non_match());
        assert!(result.is_match());
    }

    #[test]
    fn test_from_rule_copies_fields() {
        let rule = Rule::compile(
            &RuleDefinition::window("npm", "Bambot detected an npm error!", "npm ERR!")
                .with_issue("WEB-3"),
        )
        .unwrap();
        let detection = Detection::from_rule(&rule, "npm ERR! code E404");
        assert_eq!(detection.rule, "npm");
        assert_eq!(detection.comment, "Bambot detected an npm error!");
        assert_eq!(detection.issue_reference.as_deref(), Some("WEB-3"));
        assert_eq!(detection.snippet, "npm ERR! code E404");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ScanResult::from(None), ScanResult::non_match());
        let detection = Detection::new("r", "c", "s");
        assert_eq!(
            ScanResult::from(Some(detection.clone())),
            ScanResult::Matched(detection)
        );
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_value(ScanResult::non_match()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "no_match" }));

        let matched = ScanResult::Matched(Detection::new("generic", "c", "ERROR"));
        let json = serde_json::to_value(&matched).unwrap();
        assert_eq!(json["status"], "matched");
        assert_eq!(json["rule"], "generic");
        assert!(json.get("issue_reference").is_none());

        let back: ScanResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, matched);
    }
}
