//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: search error (invalid configuration, attempt cap exhausted)
//! - 11: I/O error (config file read, swatch rendering or write)
//! - 12: input error (unreadable config or color list contents)
//! - 13: serialization error

use gamut_search_core::SamplerError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A sampler-level error.
    Search(SamplerError),
    /// An I/O error.
    Io(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Search(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Search(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<SamplerError> for CliError {
    fn from(e: SamplerError) -> Self {
        match e {
            SamplerError::Io(msg) => CliError::Io(msg),
            SamplerError::InvalidDimensions => CliError::Io(e.to_string()),
            SamplerError::InvalidColor(msg) => CliError::Input(msg),
            other => CliError::Search(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
