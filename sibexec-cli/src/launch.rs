//! Resolution and process replacement for the launcher.
//!
//! This module drives the library in the launcher's fixed sequence:
//! resolve the script's symlink chain, attach the interpreter fragment to
//! the resolved directory, assemble the argument vector, and exec.

use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use sibexec::path::{join, MAX_PATH_LEN};
use sibexec::{Error, LinkResolver, Logger};

use crate::cli::Cli;
use crate::error::CliError;

/// Compute the interpreter path to exec: the script's resolved directory
/// with the interpreter fragment attached.
///
/// # Errors
///
/// Returns a [`CliError`] when the script cannot be resolved or the
/// attached interpreter path does not fit the path-length budget.
pub fn interpreter_target(cli: &Cli, logger: &Logger) -> Result<PathBuf, CliError> {
    let resolved = LinkResolver::new().resolve(&cli.script)?;
    logger.debug(&format!(
        "{} resolved to {}",
        cli.script.display(),
        resolved.display()
    ));

    let target = match join::join(&resolved, &cli.interpreter, MAX_PATH_LEN) {
        Ok(path) => path,
        // At this boundary the overflow names the interpreter the user
        // asked for, not the internal join arithmetic.
        Err(Error::CapacityExceeded { .. }) => {
            return Err(CliError::Library(Error::PathTooLong {
                path: cli.interpreter.clone(),
                limit: MAX_PATH_LEN,
            }))
        }
        Err(e) => return Err(CliError::Library(e)),
    };

    logger.info(&format!("launching {}", target.display()));
    Ok(target)
}

/// Resolve, attach, and replace the current process image.
///
/// The assembled argument vector is `[interpreter, ...trailing args]`; the
/// script argument itself is not passed to the new process. Only ever
/// returns on failure: a successful exec does not return.
pub fn run(cli: &Cli, logger: &Logger) -> CliError {
    let target = match interpreter_target(cli, logger) {
        Ok(path) => path,
        Err(e) => return e,
    };

    let err = Command::new(&target).args(&cli.args).exec();
    CliError::Exec {
        path: target,
        source: err,
    }
}
