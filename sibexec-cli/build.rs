//! Build script for sibexec-cli.
//!
//! This script generates a man page at build time using clap_mangen. The
//! generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("sibexec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a script's interpreter from the script's real directory")
        .long_about(
            "Follows the script's symlink chain to its real file, locates the interpreter \
             relative to that real location, and replaces the current process with it.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interpreter")
                .value_name("INTERPRETER")
                .required(true)
                .help("Interpreter to launch, located relative to the resolved script"),
        )
        .arg(
            Arg::new("script")
                .value_name("SCRIPT")
                .required(true)
                .help("Script whose symlink chain is followed"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Arguments passed through to the interpreter untouched"),
        )
}

fn main() {
    // Generate the man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sibexec.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
