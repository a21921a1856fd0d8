//! AOC CLI - Command-line interface for running Advent of Code solutions

mod cli;
mod error;
mod output;
mod runner;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_runner::RegistryBuilder;
use clap::Parser;
use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_plugins()?.build();

    match cli.command {
        Command::Run(args) => runner::run_solutions(
            &registry,
            &args.select.to_filter(),
            &args.input.to_selection(),
        ),
        Command::List(args) => {
            runner::list_solutions(&registry, &args.to_filter(), args.inputs);
            Ok(())
        }
        Command::Bench(args) => runner::bench_solutions(
            &registry,
            &args.select.to_filter(),
            &args.input.to_selection(),
            &args.to_options(),
        ),
    }
}
