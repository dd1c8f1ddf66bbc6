//! Ordered, immutable rule table

use std::collections::HashSet;
use std::iter;

use tracing::debug;

use super::patterns::{builtin_signatures, generic_fallback};
use super::rule::{Rule, RuleDefinition};
use crate::error::RuleError;

/// Failure signatures in priority order, followed by exactly one fallback.
///
/// The fallback is stored apart from the signatures so it is always
/// evaluated last. A `RuleSet` is built once at startup and only read
/// afterwards; it is `Send + Sync` and can be shared across threads.
#[derive(Debug, Clone)]
pub struct RuleSet {
    signatures: Vec<Rule>,
    fallback: Rule,
}

impl RuleSet {
    /// Compile the built-in rule table
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_definitions(&builtin_signatures(), &generic_fallback())
    }

    /// Compile a rule table from definitions
    pub fn from_definitions(
        signatures: &[RuleDefinition],
        fallback: &RuleDefinition,
    ) -> Result<Self, RuleError> {
        let set = Self {
            signatures: signatures
                .iter()
                .map(Rule::compile)
                .collect::<Result<Vec<_>, _>>()?,
            fallback: Rule::compile(fallback)?,
        };
        set.check_unique_names()?;

        debug!(
            signatures = set.signatures.len(),
            fallback = set.fallback.name(),
            "Compiled rule set"
        );
        Ok(set)
    }

    /// Append custom signatures after the existing ones, still ahead of the
    /// fallback
    pub fn with_custom(mut self, custom: &[RuleDefinition]) -> Result<Self, RuleError> {
        for definition in custom {
            debug!(rule = %definition.name, "Adding custom rule");
            self.signatures.push(Rule::compile(definition)?);
        }
        self.check_unique_names()?;
        Ok(self)
    }

    fn check_unique_names(&self) -> Result<(), RuleError> {
        let mut seen = HashSet::new();
        for rule in self.iter() {
            if !seen.insert(rule.name()) {
                return Err(RuleError::DuplicateName {
                    name: rule.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// All rules in evaluation order, the fallback last
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.signatures.iter().chain(iter::once(&self.fallback))
    }

    /// Specific signatures, without the fallback
    pub fn signatures(&self) -> &[Rule] {
        &self.signatures
    }

    pub fn fallback(&self) -> &Rule {
        &self.fallback
    }

    /// Look a rule up by name
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.iter().find(|rule| rule.name() == name)
    }

    /// Number of rules, fallback included
    pub fn len(&self) -> usize {
        self.signatures.len() + 1
    }

    /// Always false: a rule set holds at least its fallback
    pub fn is_empty(&self) -> bool {
        false
    }
}
