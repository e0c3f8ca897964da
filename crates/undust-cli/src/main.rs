use undust_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Diagnostics go to stderr; stdout carries only generated candidates.
    logging::init_logging_stderr();

    if let Err(err) = Cli::run_from_args() {
        eprintln!("undust error: {:#}", err);
        std::process::exit(1);
    }
}
