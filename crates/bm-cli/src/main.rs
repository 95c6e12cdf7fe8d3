//! Brickmesh CLI - resolve mesh names and parse notebook paths from a shell

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{config, name, parse};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Name(args) => name::execute(args, &cli.global),
        cli::Commands::Parse(args) => parse::execute(args, &cli.global),
        cli::Commands::Config(args) => config::execute(args, &cli.global),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
