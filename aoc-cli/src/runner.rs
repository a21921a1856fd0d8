//! Command implementations over the solution registry

use std::time::{Duration, Instant};

use aoc_runner::{
    BenchOptions, InputSelection, SolutionFilter, SolutionRegistry, resolve, run_benchmark,
};

use crate::error::CliError;
use crate::output;

/// Run every matching solution against its resolved input and print the
/// answers, followed by a summary when more than one solution ran.
pub fn run_solutions(
    registry: &SolutionRegistry,
    filter: &SolutionFilter,
    selection: &InputSelection,
) -> Result<(), CliError> {
    let entries = registry.select(filter);
    if entries.is_empty() {
        output::print_no_match();
        return Ok(());
    }

    let count = entries.len();
    let mut total = Duration::ZERO;
    for entry in entries {
        let input = resolve(entry, selection).map_err(|source| CliError::Input {
            label: entry.label(),
            source,
        })?;
        let solution = entry.build();
        let started = Instant::now();
        let answer = solution.run(&input.text).map_err(|source| CliError::Solve {
            label: entry.label(),
            source,
        })?;
        let elapsed = started.elapsed();
        total += elapsed;
        output::print_result(&entry.label(), &answer, elapsed);
    }
    if count > 1 {
        output::print_summary(count, total);
    }
    Ok(())
}

/// Print the registry tree for every matching solution.
pub fn list_solutions(registry: &SolutionRegistry, filter: &SolutionFilter, show_inputs: bool) {
    let entries = registry.select(filter);
    if entries.is_empty() {
        output::print_no_match();
        return;
    }
    output::print_solutions(&entries, show_inputs);
}

/// Benchmark every matching solution against its resolved input.
pub fn bench_solutions(
    registry: &SolutionRegistry,
    filter: &SolutionFilter,
    selection: &InputSelection,
    options: &BenchOptions,
) -> Result<(), CliError> {
    let entries = registry.select(filter);
    if entries.is_empty() {
        output::print_no_match();
        return Ok(());
    }

    for entry in entries {
        let input = resolve(entry, selection).map_err(|source| CliError::Input {
            label: entry.label(),
            source,
        })?;
        let solution = entry.build();
        output::print_bench_start(&entry.label(), &input.origin);
        let report =
            run_benchmark(solution.as_ref(), &input.text, options).map_err(|source| {
                CliError::Solve {
                    label: entry.label(),
                    source,
                }
            })?;
        output::print_bench_report(&report);
    }
    Ok(())
}
