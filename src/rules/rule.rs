//! Failure signature rules
//!
//! A rule comes in two shapes. [`RuleDefinition`] is plain data: the
//! compiled-in table and the `[[rules]]` entries of `.bambot.toml` are both
//! written this way. [`Rule`] is the compiled form used by the scanner, with
//! every pattern already turned into a [`Regex`].

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::extract::line_window;
use crate::error::RuleError;

/// Which match of a window pattern a rule extracts around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    /// The earliest match in the log
    #[default]
    First,
    /// The latest match in the log, usually closest to the real failure
    Last,
}

fn default_after() -> usize {
    10
}

/// How a rule finds its signature and carves the snippet, as written in
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyDefinition {
    /// Everything from the first `start` match up to the next `end` match
    Region {
        /// Pattern opening the region, included in the snippet
        start: String,
        /// Pattern closing the region, excluded from the snippet
        end: String,
    },
    /// Whole lines around one match of `pattern`
    Window {
        /// Signature pattern
        pattern: String,
        /// Which match to use
        #[serde(default)]
        occurrence: Occurrence,
        /// Lines of context above the match
        #[serde(default)]
        before: usize,
        /// Lines of context below the match
        #[serde(default = "default_after")]
        after: usize,
    },
}

/// Uncompiled rule.
///
/// # Examples
///
/// ```rust
/// use bambot::rules::{Rule, RuleDefinition};
///
/// let definition = RuleDefinition::window("terraform", "Terraform failed!", r"(?m)^Error: ")
///     .with_issue("OPS-42")
///     .with_context(0, 5)
///     .last_occurrence();
///
/// let rule = Rule::compile(&definition).unwrap();
/// assert_eq!(rule.find("ok\nError: boom\nmore"), Some("Error: boom\nmore"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Stable rule name, unique within a rule set
    pub name: String,

    /// Comment reported when the rule matches
    pub comment: String,

    /// Issue tracker key for this signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    /// Matching and extraction policy
    #[serde(flatten)]
    pub policy: PolicyDefinition,
}

impl RuleDefinition {
    /// Create a rule capturing the text between two anchors
    pub fn region(
        name: impl Into<String>,
        comment: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            issue: None,
            policy: PolicyDefinition::Region {
                start: start.into(),
                end: end.into(),
            },
        }
    }

    /// Create a rule capturing the first match of `pattern` with no context
    /// above and the default context below
    pub fn window(
        name: impl Into<String>,
        comment: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            issue: None,
            policy: PolicyDefinition::Window {
                pattern: pattern.into(),
                occurrence: Occurrence::First,
                before: 0,
                after: default_after(),
            },
        }
    }

    /// Set the issue tracker key
    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    /// Set the lines of context of a window rule
    pub fn with_context(mut self, lines_before: usize, lines_after: usize) -> Self {
        if let PolicyDefinition::Window { before, after, .. } = &mut self.policy {
            *before = lines_before;
            *after = lines_after;
        }
        self
    }

    /// Make a window rule extract around its last match
    pub fn last_occurrence(mut self) -> Self {
        if let PolicyDefinition::Window { occurrence, .. } = &mut self.policy {
            *occurrence = Occurrence::Last;
        }
        self
    }
}

/// Compiled matching policy.
#[derive(Debug, Clone)]
pub enum MatchPolicy {
    /// Text from the first `start` match to the following `end` match
    Region { start: Regex, end: Regex },
    /// Lines around the first or last `pattern` match
    Window {
        pattern: Regex,
        occurrence: Occurrence,
        before: usize,
        after: usize,
    },
}

/// A compiled failure signature.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    comment: String,
    issue_reference: Option<String>,
    policy: MatchPolicy,
}

fn compile_pattern(rule: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        rule: rule.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

impl Rule {
    /// Compile a definition, failing on the first invalid pattern
    pub fn compile(definition: &RuleDefinition) -> Result<Self, RuleError> {
        let name = definition.name.as_str();
        let policy = match &definition.policy {
            PolicyDefinition::Region { start, end } => MatchPolicy::Region {
                start: compile_pattern(name, start)?,
                end: compile_pattern(name, end)?,
            },
            PolicyDefinition::Window {
                pattern,
                occurrence,
                before,
                after,
            } => MatchPolicy::Window {
                pattern: compile_pattern(name, pattern)?,
                occurrence: *occurrence,
                before: *before,
                after: *after,
            },
        };

        Ok(Self {
            name: definition.name.clone(),
            comment: definition.comment.clone(),
            issue_reference: definition.issue.clone(),
            policy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn issue_reference(&self) -> Option<&str> {
        self.issue_reference.as_deref()
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Short human-readable form of the policy, for rule listings
    pub fn policy_summary(&self) -> String {
        match &self.policy {
            MatchPolicy::Region { start, end } => {
                format!("region {} .. {}", start.as_str(), end.as_str())
            }
            MatchPolicy::Window {
                pattern,
                occurrence,
                before,
                after,
            } => {
                let which = match occurrence {
                    Occurrence::First => "first",
                    Occurrence::Last => "last",
                };
                format!("{} {} (-{}/+{} lines)", which, pattern.as_str(), before, after)
            }
        }
    }

    /// Extract the untruncated snippet for this rule, or `None` when the
    /// signature is absent.
    ///
    /// A region whose start anchor has no end anchor after it does not match.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        match &self.policy {
            MatchPolicy::Region { start, end } => {
                let opening = start.find(text)?;
                let closing = end.find_at(text, opening.end())?;
                Some(&text[opening.start()..closing.start()])
            }
            MatchPolicy::Window {
                pattern,
                occurrence,
                before,
                after,
            } => {
                let found = match occurrence {
                    Occurrence::First => pattern.find(text),
                    Occurrence::Last => pattern.find_iter(text).last(),
                }?;
                Some(line_window(text, found.start(), found.end(), *before, *after))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(definition: RuleDefinition) -> Rule {
        Rule::compile(&definition).unwrap()
    }

    #[test]
    fn test_region_includes_start_excludes_end() {
        let rule = compile(RuleDefinition::region("r", "c", r"BEGIN", r"END"));
        assert_eq!(rule.find("xx BEGIN\nbody\nEND yy"), Some("BEGIN\nbody\n"));
    }

    #[test]
    fn test_region_without_end_does_not_match() {
        let rule = compile(RuleDefinition::region("r", "c", r"BEGIN", r"END"));
        assert_eq!(rule.find("BEGIN\nbody"), None);
        assert_eq!(rule.find("END\nBEGIN\nbody"), None);
    }

    #[test]
    fn test_region_uses_first_start_anchor() {
        let rule = compile(RuleDefinition::region("r", "c", r"BEGIN \d", r"END"));
        assert_eq!(rule.find("BEGIN 1\nEND\nBEGIN 2\nEND"), Some("BEGIN 1\n"));
    }

    #[test]
    fn test_region_end_anchor_respects_multiline_start() {
        let rule = compile(RuleDefinition::region("r", "c", r"(?m)^BEGIN$", r"(?m)^END$"));
        assert_eq!(rule.find("BEGIN\nnot END\nEND\n"), Some("BEGIN\nnot END\n"));
    }

    #[test]
    fn test_window_first_and_last() {
        let text = "a\nerror one\nb\nerror two\nc";
        let first = compile(RuleDefinition::window("w", "c", "error").with_context(0, 0));
        let last = compile(
            RuleDefinition::window("w", "c", "error")
                .with_context(0, 1)
                .last_occurrence(),
        );
        assert_eq!(first.find(text), Some("error one"));
        assert_eq!(last.find(text), Some("error two\nc"));
    }

    #[test]
    fn test_window_no_match() {
        let rule = compile(RuleDefinition::window("w", "c", "error"));
        assert_eq!(rule.find(""), None);
        assert_eq!(rule.find("all good"), None);
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_rule_name() {
        let err = Rule::compile(&RuleDefinition::window("broken", "c", "(unclosed")).unwrap_err();
        match err {
            RuleError::InvalidPattern { rule, pattern, .. } => {
                assert_eq!(rule, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_end_anchor_is_reported() {
        let definition = RuleDefinition::region("r", "c", "ok", "[");
        assert!(matches!(
            Rule::compile(&definition),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_builders_ignore_region_rules() {
        let definition = RuleDefinition::region("r", "c", "a", "b")
            .with_context(3, 3)
            .last_occurrence()
            .with_issue("BAM-1");
        assert_eq!(
            definition.policy,
            PolicyDefinition::Region {
                start: "a".to_string(),
                end: "b".to_string()
            }
        );
        assert_eq!(definition.issue.as_deref(), Some("BAM-1"));
    }

    #[test]
    fn test_accessors_copy_definition() {
        let rule = compile(RuleDefinition::window("w", "Comment!", "x").with_issue("BAM-7"));
        assert_eq!(rule.name(), "w");
        assert_eq!(rule.comment(), "Comment!");
        assert_eq!(rule.issue_reference(), Some("BAM-7"));
        assert!(matches!(rule.policy(), MatchPolicy::Window { .. }));
    }

    #[test]
    fn test_policy_summary() {
        let rule = compile(
            RuleDefinition::window("w", "c", "boom")
                .with_context(2, 4)
                .last_occurrence(),
        );
        assert_eq!(rule.policy_summary(), "last boom (-2/+4 lines)");
        let region = compile(RuleDefinition::region("r", "c", "a", "b"));
        assert_eq!(region.policy_summary(), "region a .. b");
    }

    #[test]
    fn test_definition_from_toml() {
        let definition: RuleDefinition = toml::from_str(
            r#"
name = "terraform"
comment = "Terraform failed!"
issue = "OPS-42"
policy = "window"
pattern = "(?m)^Error: "
occurrence = "last"
before = 1
"#,
        )
        .unwrap();
        assert_eq!(definition.issue.as_deref(), Some("OPS-42"));
        assert_eq!(
            definition.policy,
            PolicyDefinition::Window {
                pattern: "(?m)^Error: ".to_string(),
                occurrence: Occurrence::Last,
                before: 1,
                after: 10,
            }
        );
    }
}
