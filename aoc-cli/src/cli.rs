//! CLI argument parsing using clap

use std::path::PathBuf;
use std::time::Duration;

use aoc_runner::{BenchOptions, InputSelection, SolutionFilter};
use clap::{Args, Parser, Subcommand};

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solutions", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run solutions and print their answers
    Run(RunArgs),
    /// List registered solutions
    List(ListArgs),
    /// Benchmark solutions
    Bench(BenchArgs),
}

/// Solution selection shared by `run` and `bench`
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Day to select (runs all days if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to select (runs all parts if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Variant token, e.g. "xor" or "part2" (runs every take if omitted)
    pub variant: Option<String>,
}

/// Input choice shared by `run` and `bench`
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Registered input to use: index, name, path, or kind
    #[arg(short, long)]
    pub input: Option<String>,

    /// Read input from this file instead of a registered input
    #[arg(long, conflicts_with = "input")]
    pub custom_input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Day to list (lists all days if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to list (lists all parts if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Also show each solution's registered inputs
    #[arg(long)]
    pub inputs: bool,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum warmup time in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub min_warmup_time: u64,

    /// Minimum number of warmup rounds
    #[arg(long, default_value_t = 10)]
    pub min_warmup_rounds: u32,

    /// Minimum sample time in milliseconds
    #[arg(long, default_value_t = 10000)]
    pub min_sample_time: u64,

    /// Minimum number of sample rounds
    #[arg(long, default_value_t = 10)]
    pub min_sample_rounds: u32,

    /// Skip the warmup phase
    #[arg(long)]
    pub disable_warmup: bool,
}

impl SelectArgs {
    pub fn to_filter(&self) -> SolutionFilter {
        SolutionFilter {
            day: self.day,
            part: self.part,
            variant: self.variant.clone(),
        }
    }
}

impl InputArgs {
    pub fn to_selection(&self) -> InputSelection {
        if let Some(path) = &self.custom_input {
            InputSelection::CustomPath(path.clone())
        } else if let Some(token) = &self.input {
            InputSelection::Selector(token.clone())
        } else {
            InputSelection::Default
        }
    }
}

impl ListArgs {
    pub fn to_filter(&self) -> SolutionFilter {
        SolutionFilter {
            day: self.day,
            part: self.part,
            variant: None,
        }
    }
}

impl BenchArgs {
    pub fn to_options(&self) -> BenchOptions {
        BenchOptions {
            min_warmup_time: Duration::from_millis(self.min_warmup_time),
            min_warmup_rounds: self.min_warmup_rounds,
            min_sample_time: Duration::from_millis(self.min_sample_time),
            min_sample_rounds: self.min_sample_rounds,
            disable_warmup: self.disable_warmup,
        }
    }
}
