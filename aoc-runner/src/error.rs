//! Error types shared across the harness

use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputKind;

/// Errors raised while assembling the solution registry
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Two solutions registered the same day/part/variant key
    #[error("Duplicate solution: {0}")]
    Duplicate(String),
}

/// Errors raised by a solution while computing an answer
#[derive(Error, Debug)]
pub enum SolveError {
    /// The input text does not match the puzzle format
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search or algorithm finished without producing an answer
    #[error("No solution: {0}")]
    NoSolution(String),

    /// A foreign error surfaced while solving
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while selecting or loading an input
#[derive(Error, Debug)]
pub enum InputError {
    /// The solution registered no inputs at all
    #[error("No inputs registered for {0}")]
    NoInputs(String),

    /// The selector matched no registered input by index, name, path, or kind
    #[error("No input matches selector '{0}'")]
    UnknownSelector(String),

    /// A numeric selector pointed past the registered inputs
    #[error("No input at index {index}, only {count} registered")]
    IndexOutOfRange { index: usize, count: usize },

    /// A kind selector matched no registered input
    #[error("No {0} input registered")]
    NoneOfKind(InputKind),

    /// An on-disk input could not be read
    #[error("Cannot read input file '{}'", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
