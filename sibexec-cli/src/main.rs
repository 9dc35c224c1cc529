//! Main entry point for the sibexec launcher.
//!
//! `sibexec <interpreter> <script> [args...]` follows the script's symlink
//! chain to its real file, locates the interpreter next to that real file,
//! and replaces the current process with it. The script argument exists
//! only to anchor the resolution; it is not passed on to the interpreter.

mod cli;
mod error;
mod launch;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments; clap reports usage errors on stderr with exit
    // code 2 before any filesystem access happens.
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = sibexec::init_logger(cli.verbose, cli.quiet);

    // run only returns on failure: a successful exec replaces this
    // process image outright.
    let err = launch::run(&cli, &logger);
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}
