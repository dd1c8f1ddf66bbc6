//! Scan command - Classify build logs

use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{info, info_span, warn};

use super::{load_config, write_output, ScanArgs, ScanFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, LogReport, MarkdownComment, ReportRenderer, TerminalOutput};
use crate::error::{BambotError, ScanError};
use crate::scanner::{LogSource, Scanner};

pub fn execute(args: ScanArgs, config_path: Option<&std::path::Path>) -> Result<i32, BambotError> {
    let mut config = load_config(config_path)?;

    if let Some(max_lines) = args.max_lines {
        config.snippet.max_lines = max_lines;
    }
    if let Some(max_width) = args.max_width {
        config.snippet.max_width = max_width;
    }
    config.validate()?;

    let scanner = config.build_scanner()?;

    let sources = log_sources(&args.files);
    let reports = scan_sources(&scanner, &sources)?;

    let renderer: Box<dyn ReportRenderer> = match args.format {
        ScanFormat::Terminal => Box::new(TerminalOutput::new()),
        ScanFormat::Json => Box::new(JsonOutput::new()),
        ScanFormat::Markdown => Box::new(MarkdownComment::new()),
    };

    let rendered = renderer.render_report(&reports)?;
    write_output(&rendered, args.output.as_deref())?;

    let exit_code = if reports.iter().any(|r| r.result.is_match()) {
        exit_codes::FAILURE_DETECTED
    } else {
        exit_codes::SUCCESS
    };

    Ok(exit_code)
}

/// Map command-line arguments to sources.
///
/// No argument means stdin. Stdin can only be read once, so repeated `-`
/// arguments collapse into the first one.
pub fn log_sources(files: &[PathBuf]) -> Vec<LogSource> {
    if files.is_empty() {
        return vec![LogSource::Stdin];
    }

    let mut sources = Vec::with_capacity(files.len());
    for source in files.iter().map(|f| LogSource::from_arg(f)) {
        if source == LogSource::Stdin && sources.contains(&LogSource::Stdin) {
            warn!("Standard input given more than once, reading it once");
            continue;
        }
        sources.push(source);
    }
    sources
}

/// Read and scan every source in parallel, keeping input order
pub fn scan_sources(scanner: &Scanner, sources: &[LogSource]) -> Result<Vec<LogReport>, ScanError> {
    sources
        .par_iter()
        .map(|source| {
            let span = info_span!("log", source = %source);
            let _guard = span.enter();

            let text = source.read()?;
            let result = scanner.scan(&text);
            info!(
                rule = result.rule(),
                matched = result.is_match(),
                "Scanned log"
            );

            Ok(LogReport::new(source.to_string(), result))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_sources_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut sources = Vec::new();
        for i in 0..8 {
            let path = temp_dir.path().join(format!("{i}.log"));
            let body = if i % 2 == 0 { "ERROR: broken\n" } else { "all good\n" };
            fs::write(&path, body).unwrap();
            sources.push(LogSource::File(path));
        }

        let scanner = Scanner::new(RuleSet::builtin().unwrap());
        let reports = scan_sources(&scanner, &sources).unwrap();

        assert_eq!(reports.len(), 8);
        for (i, report) in reports.iter().enumerate() {
            assert!(report.source.ends_with(&format!("{i}.log")));
            assert_eq!(report.result.is_match(), i % 2 == 0);
        }
    }

    #[test]
    fn test_log_sources_defaults_to_stdin() {
        assert_eq!(log_sources(&[]), vec![LogSource::Stdin]);
    }

    #[test]
    fn test_log_sources_reads_stdin_once() {
        let files = [
            PathBuf::from("-"),
            PathBuf::from("a.log"),
            PathBuf::from("-"),
        ];
        assert_eq!(
            log_sources(&files),
            vec![LogSource::Stdin, LogSource::File(PathBuf::from("a.log"))]
        );
    }

    #[test]
    fn test_scan_sources_fails_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let sources = vec![LogSource::File(temp_dir.path().join("missing.log"))];

        let scanner = Scanner::new(RuleSet::builtin().unwrap());
        assert!(scan_sources(&scanner, &sources).is_err());
    }
}
