//! pipeconf binary entry point.

use pipeconf::ui::output;
use std::process::ExitCode;

fn main() -> ExitCode {
    match pipeconf::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
