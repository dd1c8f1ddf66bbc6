//! Error types for Bambot
//!
//! Scanning itself never fails: a log that matches nothing is a regular
//! [`ScanResult`](crate::rules::ScanResult). The errors below cover what can
//! go wrong around the engine, namely building the rule table, loading
//! configuration and reading log input.

use thiserror::Error;

/// Main error type for Bambot
#[derive(Error, Debug)]
pub enum BambotError {
    /// Rule table errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log input errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to write rendered output
    #[error("Failed to write output '{path}': {source}")]
    OutputWrite {
        /// Destination path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors raised while compiling the rule table.
///
/// These are configuration defects: they surface once, before the first scan.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A rule pattern is not a valid regular expression
    #[error("Invalid pattern for rule '{rule}' ('{pattern}'): {source}")]
    InvalidPattern {
        /// Name of the offending rule
        rule: String,
        /// The pattern as written
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// Two rules share a name
    #[error("Duplicate rule name '{name}'")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`](crate::config::Config)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration value is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted path of the field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

/// Errors that occur while reading log input
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read a log file
    #[error("Failed to read log '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to read a log from standard input
    #[error("Failed to read log from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

impl From<toml::de::Error> for BambotError {
    fn from(err: toml::de::Error) -> Self {
        BambotError::Config(ConfigError::Parse(err))
    }
}
