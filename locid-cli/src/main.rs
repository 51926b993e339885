// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: the error message is the user-facing output on failure.
// - exit: `std::process::exit()` carries the status back to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use clap::Parser;
use locid_cli::{Cli, logging, run};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = run(&cli, &mut stdout.lock(), &mut stderr.lock());

    match status {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
