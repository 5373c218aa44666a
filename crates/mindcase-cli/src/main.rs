//! mindcase CLI - Compile mind-map test designs into test cases
//!
//! This is the main entry point for the mindcase command-line interface.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = utils::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            product,
        } => commands::convert(&input, output, product, &config, cli.quiet),
        Commands::Suites { input, pretty } => commands::print_suites(&input, pretty, &config),
    }
}
