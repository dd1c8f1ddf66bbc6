//! Markdown issue comment output
//!
//! Renders the body an issue-tracker publisher would post for each log:
//! the rule comment, its tracking issue and the snippet in a code fence.

use crate::error::BambotError;

use super::{LogReport, ReportRenderer};

pub struct MarkdownComment;

impl MarkdownComment {
    pub fn new() -> Self {
        Self
    }

    fn format_report(&self, report: &LogReport) -> String {
        let Some(detection) = report.result.detection() else {
            return format!(
                "_No known failure signature found in `{}`._\n",
                report.source
            );
        };

        let mut output = format!("**{}**\n\n", detection.comment);
        if let Some(issue) = &detection.issue_reference {
            output.push_str(&format!("Known issue: {}\n\n", issue));
        }
        output.push_str(&format!(
            "Log: `{}` (rule `{}`)\n\n",
            report.source, detection.rule
        ));

        let fence = code_fence(&detection.snippet);
        output.push_str(&format!("{}text\n{}", fence, detection.snippet));
        if !detection.snippet.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&fence);
        output.push('\n');

        output
    }
}

impl Default for MarkdownComment {
    fn default() -> Self {
        Self::new()
    }
}

/// A backtick fence longer than any backtick run inside `content`
fn code_fence(content: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in content.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

impl ReportRenderer for MarkdownComment {
    fn render_report(&self, reports: &[LogReport]) -> Result<String, BambotError> {
        let sections: Vec<String> = reports.iter().map(|r| self.format_report(r)).collect();
        Ok(sections.join("\n---\n\n"))
    }
}
