//! cardbar - Command-line tool for inspecting themed card bar layer stacks

use std::process::ExitCode;

use cardbar::cli;

fn main() -> ExitCode {
    cli::run()
}
