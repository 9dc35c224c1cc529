//! CLI structure for the sibexec launcher.
//!
//! This module defines the argument surface using clap's derive macros.
//! The launcher takes two required positionals and passes everything after
//! them through to the interpreter untouched, so flags must appear before
//! the positionals.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line launcher that execs an interpreter stored next to a
/// script's real file.
#[derive(Parser)]
#[command(name = "sibexec")]
#[command(
    version,
    about = "Run a script's interpreter from the script's real directory",
    long_about = "Follows the script's symlink chain to its real file, locates the \
                  interpreter relative to that real location, and replaces the current \
                  process with it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Interpreter to launch, located relative to the resolved script
    #[arg(value_name = "INTERPRETER")]
    pub interpreter: PathBuf,

    /// Script whose symlink chain is followed
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Arguments passed through to the interpreter untouched
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["sibexec", "python", "/opt/app/bin/tool"]).unwrap();
        assert_eq!(cli.interpreter, PathBuf::from("python"));
        assert_eq!(cli.script, PathBuf::from("/opt/app/bin/tool"));
        assert!(cli.args.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_trailing_args_pass_through_hyphens() {
        let cli = Cli::try_parse_from([
            "sibexec",
            "python",
            "/opt/app/bin/tool",
            "--flag",
            "-x",
            "value",
        ])
        .unwrap();
        assert_eq!(cli.args, vec!["--flag", "-x", "value"]);
    }

    #[test]
    fn test_missing_script_is_an_error() {
        assert!(Cli::try_parse_from(["sibexec", "python"]).is_err());
    }

    #[test]
    fn test_missing_all_positionals_is_an_error() {
        assert!(Cli::try_parse_from(["sibexec"]).is_err());
    }

    #[test]
    fn test_verbose_flag_before_positionals() {
        let cli =
            Cli::try_parse_from(["sibexec", "--verbose", "python", "/opt/app/bin/tool"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
