//! Exit codes for the CLI
//!
//! Standard exit codes used by the Bambot CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | No failure detected | Every log is clean |
//! | 1 | `FAILURE_DETECTED` | Failure detected | A log matched a signature |
//! | 3 | `ERROR` | Runtime error | Log file not found, bad rule pattern |
//! | 4 | `INVALID_ARGS` | Invalid arguments | `--max-width 2`, `--format xml` |

use crate::error::{BambotError, ConfigError};

/// Success - no log matched a failure signature.
pub const SUCCESS: i32 = 0;

/// At least one log matched a failure signature.
pub const FAILURE_DETECTED: i32 = 1;

/// Runtime error (file not found, invalid configuration file, etc.).
///
/// Used when:
/// - A log file cannot be read
/// - The configuration file is missing or not valid TOML
/// - A custom rule pattern does not compile
pub const ERROR: i32 = 3;

/// Invalid arguments (unknown flags or values, out-of-range limits, etc.).
pub const INVALID_ARGS: i32 = 4;

/// Exit code to use when a command fails with `err`
pub fn for_error(err: &BambotError) -> i32 {
    match err {
        BambotError::Config(ConfigError::InvalidValue { .. }) => INVALID_ARGS,
        _ => ERROR,
    }
}
