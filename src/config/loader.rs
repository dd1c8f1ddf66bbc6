//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{BambotError, ConfigError};
use crate::rules::{RuleDefinition, RuleSet};
use crate::scanner::Scanner;
use crate::utils::truncate::MIN_LINE_WIDTH;

use super::SnippetConfig;

const CONFIG_FILENAME: &str = ".bambot.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snippet limits
    #[serde(default)]
    pub snippet: SnippetConfig,

    /// Custom rules, evaluated after the built-in signatures
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl Config {
    /// Load `.bambot.toml` from the working directory, or return defaults
    pub fn load_or_default() -> Result<Self, BambotError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, BambotError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BambotError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        debug!(
            path = %path.display(),
            custom_rules = config.rules.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snippet.max_lines == 0 {
            return Err(ConfigError::InvalidValue {
                field: "snippet.max_lines".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.snippet.max_width < MIN_LINE_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "snippet.max_width".to_string(),
                message: format!("must be at least {}", MIN_LINE_WIDTH),
            });
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("rules[{}].name", index),
                    message: "must not be empty".to_string(),
                });
            }
            if rule.comment.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("rules[{}].comment", index),
                    message: format!("rule '{}' needs a comment", rule.name),
                });
            }
        }

        Ok(())
    }

    /// Compile the built-in rules plus the custom ones and wrap them in a
    /// scanner using the configured limits.
    ///
    /// This is the single initialization step of the rule table; any invalid
    /// pattern is reported here, before a log is scanned.
    pub fn build_scanner(&self) -> Result<Scanner, BambotError> {
        let rules = RuleSet::builtin()?.with_custom(&self.rules)?;
        Ok(Scanner::new(rules).with_limits(self.snippet.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::rules::{Occurrence, PolicyDefinition};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.snippet, SnippetConfig::default());
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_custom_rules_config_parsing() {
        let toml_content = r#"
[snippet]
max_lines = 12

[[rules]]
name = "terraform"
comment = "Bambot detected a Terraform error!"
issue = "OPS-42"
policy = "window"
pattern = "(?m)^Error: "
occurrence = "last"
after = 4

[[rules]]
name = "gradle"
comment = "Bambot detected a Gradle failure!"
policy = "region"
start = "FAILURE: Build failed"
end = "BUILD FAILED"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.snippet.max_lines, 12);
        assert_eq!(config.snippet.max_width, 160);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].issue.as_deref(), Some("OPS-42"));
        assert_eq!(
            config.rules[0].policy,
            PolicyDefinition::Window {
                pattern: "(?m)^Error: ".to_string(),
                occurrence: Occurrence::Last,
                before: 0,
                after: 4,
            }
        );
        assert!(matches!(
            config.rules[1].policy,
            PolicyDefinition::Region { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_small_width() {
        let mut config = Config::default();
        config.snippet.max_width = 3;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("snippet.max_width"));
    }

    #[test]
    fn test_validate_rejects_zero_lines() {
        let mut config = Config::default();
        config.snippet.max_lines = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_comment() {
        let config = Config {
            rules: vec![RuleDefinition::window("x", " ", "x")],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rules[0].comment"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".bambot.toml");
        fs::write(&path, "[snippet]\nmax_width = 80\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.snippet.max_width, 80);
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".bambot.toml");
        fs::write(&path, "[snippet\nmax_width = ").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, BambotError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_file(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err,
            BambotError::Config(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_build_scanner_applies_custom_rules() {
        let config = Config {
            rules: vec![RuleDefinition::window("deploy", "Deploy failed!", "DEPLOY FAILED")],
            snippet: SnippetConfig {
                max_lines: 2,
                max_width: 20,
            },
        };
        let scanner = config.build_scanner().unwrap();
        assert_eq!(scanner.limits().max_lines, 2);
        assert_eq!(scanner.scan("DEPLOY FAILED now").comment(), "Deploy failed!");
    }

    #[test]
    fn test_build_scanner_rejects_bad_pattern() {
        let config = Config {
            rules: vec![RuleDefinition::window("bad", "Bad!", "[")],
            ..Default::default()
        };
        let err = config.build_scanner().unwrap_err();
        assert!(matches!(
            err,
            BambotError::Rule(RuleError::InvalidPattern { .. })
        ));
    }
}
