//! ets-validate CLI entry point
//!
//! Parses arguments, runs validation and maps the verdict to the exit code.
//! All logic is delegated to the CLI module.

use ets_validate::cli;

fn main() {
    match cli::run() {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
