//! Error types for the CLI

use aoc_runner::{InputError, RegistrationError, SolveError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registry construction failed
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Input resolution failed for one solution
    #[error("{label}: {source}")]
    Input {
        label: String,
        #[source]
        source: InputError,
    },

    /// A solution reported an error
    #[error("{label}: {source}")]
    Solve {
        label: String,
        #[source]
        source: SolveError,
    },
}
