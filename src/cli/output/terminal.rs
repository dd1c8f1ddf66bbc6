//! Terminal output formatting with colors

use crate::error::BambotError;
use colored::Colorize;

use super::{LogReport, ReportRenderer, RulesRenderer};
use crate::rules::{Detection, RuleSet};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self) -> String {
        format!("\n{} v{}\n", "bambot".cyan().bold(), env!("CARGO_PKG_VERSION"))
    }

    fn format_report(&self, report: &LogReport) -> String {
        let mut output = format!("\n{}\n", report.source.white().bold());

        match report.result.detection() {
            Some(detection) => output.push_str(&self.format_detection(detection)),
            None => output.push_str(&format!(
                "  {} {}\n",
                "✓".green(),
                "No known failure signature".green()
            )),
        }

        output
    }

    fn format_detection(&self, detection: &Detection) -> String {
        let mut output = format!(
            "  {} {} [{}]\n",
            "✗".red().bold(),
            detection.comment.red().bold(),
            detection.rule.cyan()
        );

        if let Some(issue) = &detection.issue_reference {
            output.push_str(&format!("    {} {}\n", "Issue:".dimmed(), issue.yellow()));
        }

        for line in detection.snippet.split('\n') {
            output.push_str(&format!("    {} {}\n", "│".dimmed(), line));
        }

        output
    }

    fn format_summary(&self, reports: &[LogReport]) -> String {
        let matched = reports.iter().filter(|r| r.result.is_match()).count();

        format!(
            "\n{}\n{} │ {}\n",
            "━".repeat(50).dimmed(),
            format!("Failures detected: {}", matched).red().bold(),
            format!("Clean: {}", reports.len() - matched).green().bold()
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, reports: &[LogReport]) -> Result<String, BambotError> {
        let mut output = self.format_header();

        for report in reports {
            output.push_str(&self.format_report(report));
        }
        output.push_str(&self.format_summary(reports));

        Ok(output)
    }
}

impl RulesRenderer for TerminalOutput {
    fn render_rules(&self, rules: &RuleSet) -> Result<String, BambotError> {
        let mut output = self.format_header();
        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  RULES (priority order)".bold()
        ));

        for (index, rule) in rules.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {} {}\n",
                index + 1,
                rule.name().cyan().bold(),
                rule.comment()
            ));
            if let Some(issue) = rule.issue_reference() {
                output.push_str(&format!("     {} {}\n", "issue:".dimmed(), issue.yellow()));
            }
            output.push_str(&format!(
                "     {} {}\n",
                "└─".dimmed(),
                rule.policy_summary().dimmed()
            ));
        }

        Ok(output)
    }
}
