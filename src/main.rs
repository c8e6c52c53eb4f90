// integrate - numerical integration of tabulated data
// Main CLI entry point

use clap::Parser;
use integrate::cli::{Cli, CliDispatcher};
use integrate::utils::error::IntegrateError;
use integrate::utils::logging::init_logging;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.batch);

    if let Err(err) = CliDispatcher::execute(&cli) {
        eprintln!("ERROR: {err:#}");
        let code = err
            .downcast_ref::<IntegrateError>()
            .map_or(1, IntegrateError::exit_code);
        process::exit(code);
    }
}
