//! JSON output formatting

use crate::error::BambotError;
use serde::Serialize;

use super::{LogReport, ReportRenderer, RulesRenderer};
use crate::rules::RuleSet;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    version: &'static str,
    matched_count: usize,
    reports: &'a [LogReport],
}

#[derive(Serialize)]
struct RuleSummary<'a> {
    priority: usize,
    name: &'a str,
    comment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_reference: Option<&'a str>,
    policy: String,
    fallback: bool,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, reports: &[LogReport]) -> Result<String, BambotError> {
        let output = ScanOutput {
            version: env!("CARGO_PKG_VERSION"),
            matched_count: reports.iter().filter(|r| r.result.is_match()).count(),
            reports,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl RulesRenderer for JsonOutput {
    fn render_rules(&self, rules: &RuleSet) -> Result<String, BambotError> {
        let fallback = rules.fallback().name();
        let summaries: Vec<RuleSummary> = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleSummary {
                priority: index + 1,
                name: rule.name(),
                comment: rule.comment(),
                issue_reference: rule.issue_reference(),
                policy: rule.policy_summary(),
                fallback: rule.name() == fallback,
            })
            .collect();

        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}
