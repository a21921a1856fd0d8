//! Harness for registering, running, and benchmarking Advent of Code
//! solutions.
//!
//! A solution is a unit struct implementing [`Solution`], registered at
//! link time with the [`RegisterSolution`] derive together with the inputs
//! it can run against. The harness collects every registration into a
//! [`SolutionRegistry`], resolves one input per run, and times execution.
//!
//! ```no_run
//! use aoc_runner::{InputSelection, RegistryBuilder, SolutionFilter};
//!
//! let registry = RegistryBuilder::new().register_plugins()?.build();
//! for entry in registry.select(&SolutionFilter::default()) {
//!     let input = aoc_runner::resolve(entry, &InputSelection::Default)?;
//!     let answer = entry.build().run(&input.text)?;
//!     println!("{}: {answer}", entry.label());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bench;
pub mod error;
pub mod input;
pub mod registry;
pub mod solution;

pub use bench::{BenchOptions, BenchPhase, BenchReport, run_benchmark};
pub use error::{InputError, RegistrationError, SolveError};
pub use input::{
    InputKind, InputSelection, InputSource, InputSpec, ResolvedInput, resolve,
};
pub use registry::{RegistryBuilder, SolutionEntry, SolutionFilter, SolutionRegistry};
pub use solution::{Solution, SolutionFactory, SolutionPlugin};

pub use aoc_runner_macros::RegisterSolution;

// Re-exported so the derive's expansion can name inventory through this crate.
pub use inventory;
