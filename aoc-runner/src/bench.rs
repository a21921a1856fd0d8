//! Repeated-timing benchmark harness.
//!
//! A benchmark runs two phases over one solution and one input: a warmup,
//! unless disabled, and a sample. Each phase keeps running the solution
//! until it has met both its minimum round count and its minimum elapsed
//! time; only the sample phase feeds the reported average.

use std::time::{Duration, Instant};

use crate::error::SolveError;
use crate::solution::Solution;

/// Phase minimums and the warmup switch.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    pub min_warmup_time: Duration,
    pub min_warmup_rounds: u32,
    pub min_sample_time: Duration,
    pub min_sample_rounds: u32,
    pub disable_warmup: bool,
}

impl Default for BenchOptions {
    fn default() -> BenchOptions {
        BenchOptions {
            min_warmup_time: Duration::from_millis(2000),
            min_warmup_rounds: 10,
            min_sample_time: Duration::from_millis(10000),
            min_sample_rounds: 10,
            disable_warmup: false,
        }
    }
}

/// Timing of one completed phase.
#[derive(Debug, Clone, Copy)]
pub struct BenchPhase {
    pub rounds: u32,
    pub elapsed: Duration,
}

/// Outcome of one benchmark.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    /// `None` when warmup was disabled
    pub warmup: Option<BenchPhase>,
    pub sample: BenchPhase,
}

impl BenchReport {
    /// Mean duration of one run during the sample phase.
    pub fn average(&self) -> Duration {
        // a phase always completes at least one round
        self.sample.elapsed / self.sample.rounds.max(1)
    }
}

/// Benchmark `solution` against `input`.
///
/// The same instance is reused for every round. A solve error aborts the
/// benchmark immediately.
pub fn run_benchmark(
    solution: &dyn Solution,
    input: &str,
    options: &BenchOptions,
) -> Result<BenchReport, SolveError> {
    let warmup = if options.disable_warmup {
        None
    } else {
        Some(run_phase(
            solution,
            input,
            options.min_warmup_time,
            options.min_warmup_rounds,
        )?)
    };
    let sample = run_phase(
        solution,
        input,
        options.min_sample_time,
        options.min_sample_rounds,
    )?;
    Ok(BenchReport { warmup, sample })
}

fn run_phase(
    solution: &dyn Solution,
    input: &str,
    min_time: Duration,
    min_rounds: u32,
) -> Result<BenchPhase, SolveError> {
    let mut rounds = 0u32;
    let started = Instant::now();
    loop {
        solution.run(input)?;
        rounds += 1;
        let elapsed = started.elapsed();
        if rounds >= min_rounds && elapsed >= min_time {
            return Ok(BenchPhase { rounds, elapsed });
        }
    }
}
