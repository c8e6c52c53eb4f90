// CLI module for command-line interface

pub mod integrate;
pub mod list;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::utils::config::ConfigParser;

use self::integrate::IntegrateCommand;
use self::list::ListCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "integrate")]
#[command(about = "Reads function from a file and integrates it.")]
#[command(long_about = r#"Reads function from a file and integrates it.

The data is contained in a gnuplot-style text file, with each x-y pair on a
new line, separated by white space. A single column is read as y values with
x = 0, 1, 2, ... and three columns are read as x y z for 2D data. Blank lines
and lines starting with '#' are ignored.

Examples:
  integrate data.txt                    Riemann sum of the data in data.txt
  integrate -m simpson data.txt         Use Simpson's rule
  integrate -m trap -i data.txt         Running integral with the trapezoid rule
  integrate -d 2 -m simp surface.txt    2D integral of x y z data
  cat data.txt | integrate -            Read the data from stdin
  integrate --list                      Show the available methods"#)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// File containing data to be integrated ('-' reads stdin)
    #[arg(value_name = "INTEGRATE_DATA", default_value = "-")]
    pub integrate_data: String,

    /// Number of dimensions (1 or 2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub dimensions: Option<u8>,

    /// Integration method, any unique prefix is accepted (default: riemann)
    #[arg(short, long)]
    pub method: Option<String>,

    /// List available integration methods
    #[arg(short, long)]
    pub list: bool,

    /// Compute the indefinite integral g(x) = \int_a^x f(x') dx'
    #[arg(short, long, visible_alias = "indefinate")]
    pub indefinite: bool,

    /// Output in 'batch' mode: results only, errors only in the log
    #[arg(short, long)]
    pub batch: bool,

    /// Output JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Configuration file (default: ./integrate.toml, then the user config directory)
    #[arg(long, env = "INTEGRATE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the command selected by the parsed arguments
    pub fn execute(cli: &Cli) -> anyhow::Result<()> {
        if cli.list {
            let cmd = ListCommand { json: cli.json };
            return cmd.run().context("failed to list integration methods");
        }

        let config = ConfigParser::discover(cli.config.as_deref()).context("failed to load configuration")?;
        debug!(?config, "resolved configuration");

        let cmd = IntegrateCommand::from_cli(cli, &config)?;
        cmd.run()
            .with_context(|| format!("failed to integrate data from '{}'", cmd.input))
    }
}
