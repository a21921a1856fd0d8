//! The solution contract and its link-time registration record

use crate::error::SolveError;
use crate::input::InputSpec;

/// A solver for one part of a daily puzzle, or a variant of one.
///
/// Implementations are stateless unit structs. The harness builds an
/// instance through the registered factory and may call [`Solution::run`]
/// any number of times; the benchmark harness reuses a single instance
/// across every round.
pub trait Solution: Send + Sync {
    /// Compute the answer for `input`.
    ///
    /// The answer may span multiple lines (day 10 renders a CRT image);
    /// single-line answers are printed inline.
    fn run(&self, input: &str) -> Result<String, SolveError>;
}

/// Builds a boxed solution instance.
pub type SolutionFactory = fn() -> Box<dyn Solution>;

/// Registration record submitted through `inventory`.
///
/// The `RegisterSolution` derive emits one of these per solution struct;
/// [`RegistryBuilder::register_plugins`] collects every submitted record
/// into a registry at startup.
///
/// [`RegistryBuilder::register_plugins`]: crate::registry::RegistryBuilder::register_plugins
pub struct SolutionPlugin {
    /// Puzzle day, 1 to 25
    pub day: u8,
    /// Puzzle part, 1 or 2
    pub part: u8,
    /// Variant name, `None` for the canonical solution of a part
    pub variant: Option<&'static str>,
    /// Inputs this solution can run against
    pub inputs: &'static [InputSpec],
    /// Factory producing the solution object
    pub factory: SolutionFactory,
}

inventory::collect!(SolutionPlugin);
