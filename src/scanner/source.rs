//! Log input sources
//!
//! The scanner only ever sees an in-memory string. This is where that string
//! comes from when Bambot runs as a CLI.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Where a build log is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// A log file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl LogSource {
    /// Interpret a command-line argument, `-` meaning stdin
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Read the whole log.
    ///
    /// Build logs are not always valid UTF-8; invalid sequences are replaced
    /// rather than rejected.
    pub fn read(&self) -> Result<String, ScanError> {
        match self {
            Self::File(path) => std::fs::read(path)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| ScanError::FileRead {
                    path: path.display().to_string(),
                    source,
                }),
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(ScanError::Stdin)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
