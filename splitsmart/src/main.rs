#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use std::process::ExitCode;

fn main() -> ExitCode {
    bootstrap::run()
}
