//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and adds the exec-failure case, giving
//! every failure path a specific exit code.

use std::fmt;
use std::io;
use std::path::PathBuf;

use sibexec::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (path length, resolution, join overflow).
    Library(LibError),

    /// The final process-replacement call failed.
    Exec {
        /// The interpreter path that could not be executed.
        path: PathBuf,
        /// The underlying error from the exec call.
        source: io::Error,
    },
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error; on success the process image is
    ///   replaced and no code from this program is observed)
    /// - 2: Usage, path-length, or resolution failure (usage errors are
    ///   produced by clap with the same code before this type is built)
    /// - 127: The exec call itself failed
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) => 2,
            CliError::Exec { .. } => 127,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Exec { path, source } => {
                write!(f, "failed to execute {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Exec { source, .. } => Some(source),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
