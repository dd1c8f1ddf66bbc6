//! Bambot Library
//!
//! This crate classifies CI build logs: it matches a log against an ordered
//! table of known failure signatures and extracts a bounded snippet plus a
//! comment ready to be posted to an issue tracker.
//!
//! ```rust
//! use bambot::{non_match, RuleSet, Scanner};
//!
//! let scanner = Scanner::new(RuleSet::builtin().unwrap());
//! let log = "[ERROR] COMPILATION ERROR\nFoo.java:[3,5] ';' expected\n[INFO] ------------------------------------------------------------------------\n";
//!
//! let result = scanner.scan(log);
//! assert_ne!(result, non_match());
//! assert_eq!(result.comment(), "Bambot detected a Java compilation error!");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod utils;

pub use error::BambotError;
pub use rules::{Detection, RuleSet, ScanResult};
pub use scanner::Scanner;
pub use utils::truncate::{truncate_lines_count, truncate_lines_width};

/// The canonical no-match value, see [`ScanResult::non_match`]
pub fn non_match() -> ScanResult {
    ScanResult::non_match()
}
