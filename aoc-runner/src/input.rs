//! Input registration and resolution.
//!
//! Every solution registers the inputs it can run against. Example inputs
//! are embedded in the binary with `include_str!`; real puzzle inputs are
//! read from disk relative to the working directory. Resolution picks one
//! registered input per run, or loads a user-supplied file instead.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::InputError;
use crate::registry::SolutionEntry;

/// What a registered input represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The real puzzle input
    Standard,
    /// The worked example from the puzzle text
    Example,
    /// An oversized input for stress runs
    Challenge,
}

impl InputKind {
    /// Parse a selector token, case-insensitively.
    pub fn from_token(token: &str) -> Option<InputKind> {
        match token.to_ascii_lowercase().as_str() {
            "standard" => Some(InputKind::Standard),
            "example" => Some(InputKind::Example),
            "challenge" => Some(InputKind::Challenge),
            _ => None,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            InputKind::Standard => "standard",
            InputKind::Example => "example",
            InputKind::Challenge => "challenge",
        };
        f.write_str(token)
    }
}

/// Where the input text lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Contents compiled into the binary
    Embedded(&'static str),
    /// A file read at run time, relative to the working directory
    OnDisk,
}

/// One registered input.
#[derive(Debug, Clone, Copy)]
pub struct InputSpec {
    /// Display path; for on-disk inputs, also the path that is read
    pub path: &'static str,
    pub kind: InputKind,
    /// Optional short name for selection
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub source: InputSource,
    /// Preferred during default resolution
    pub default: bool,
}

impl InputSpec {
    pub fn is_embedded(&self) -> bool {
        matches!(self.source, InputSource::Embedded(_))
    }
}

/// How the user asked for input to be chosen.
#[derive(Debug, Clone, Default)]
pub enum InputSelection {
    /// Highest-priority registered input: default-flagged first, then
    /// standard inputs, then registration order
    #[default]
    Default,
    /// A registered input picked by index, name, path, or kind token
    Selector(String),
    /// Read exactly this file, ignoring registered inputs
    CustomPath(PathBuf),
}

/// Input text ready to hand to a solution.
#[derive(Debug)]
pub struct ResolvedInput {
    pub text: Cow<'static, str>,
    /// Human-readable provenance for messages
    pub origin: String,
}

/// Pick and load the input for `entry` according to `selection`.
pub fn resolve(
    entry: &SolutionEntry,
    selection: &InputSelection,
) -> Result<ResolvedInput, InputError> {
    match selection {
        InputSelection::CustomPath(path) => load_file(path.clone()),
        InputSelection::Selector(token) => load_spec(select_spec(entry.inputs(), token)?),
        InputSelection::Default => {
            let spec = default_spec(entry.inputs())
                .ok_or_else(|| InputError::NoInputs(entry.label()))?;
            load_spec(spec)
        }
    }
}

/// Match a selector token against the registered inputs, trying index,
/// name, path, and kind in that order.
fn select_spec<'a>(inputs: &'a [InputSpec], token: &str) -> Result<&'a InputSpec, InputError> {
    if let Ok(index) = token.parse::<usize>() {
        return inputs.get(index).ok_or(InputError::IndexOutOfRange {
            index,
            count: inputs.len(),
        });
    }
    if let Some(spec) = inputs
        .iter()
        .find(|spec| spec.name.is_some_and(|name| name.eq_ignore_ascii_case(token)))
    {
        return Ok(spec);
    }
    if let Some(spec) = inputs.iter().find(|spec| spec.path.eq_ignore_ascii_case(token)) {
        return Ok(spec);
    }
    if let Some(kind) = InputKind::from_token(token) {
        return inputs
            .iter()
            .find(|spec| spec.kind == kind && spec.default)
            .or_else(|| inputs.iter().find(|spec| spec.kind == kind))
            .ok_or(InputError::NoneOfKind(kind));
    }
    Err(InputError::UnknownSelector(token.to_string()))
}

/// First input by (default flag, standard kind, registration order).
fn default_spec(inputs: &[InputSpec]) -> Option<&InputSpec> {
    inputs
        .iter()
        .min_by_key(|spec| (!spec.default, spec.kind != InputKind::Standard))
}

fn load_spec(spec: &InputSpec) -> Result<ResolvedInput, InputError> {
    match spec.source {
        InputSource::Embedded(text) => Ok(ResolvedInput {
            text: Cow::Borrowed(text),
            origin: format!("{} (embedded)", spec.path),
        }),
        InputSource::OnDisk => load_file(PathBuf::from(spec.path)),
    }
}

fn load_file(path: PathBuf) -> Result<ResolvedInput, InputError> {
    match fs::read_to_string(&path) {
        Ok(text) => Ok(ResolvedInput {
            origin: path.display().to_string(),
            text: Cow::Owned(text),
        }),
        Err(source) => Err(InputError::FileUnreadable { path, source }),
    }
}
