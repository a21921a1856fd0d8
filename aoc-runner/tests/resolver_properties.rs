//! Property tests for input resolution over arbitrary registrations.

use aoc_runner::{
    InputError, InputKind, InputSelection, InputSource, InputSpec, RegistryBuilder, Solution,
    SolutionPlugin, SolutionRegistry, SolveError, resolve,
};
use proptest::prelude::*;

const PATHS: [&str; 6] = [
    "inputs/a.txt",
    "inputs/b.txt",
    "inputs/c.txt",
    "inputs/d.txt",
    "inputs/e.txt",
    "inputs/f.txt",
];

struct Noop;

impl Solution for Noop {
    fn run(&self, _input: &str) -> Result<String, SolveError> {
        Ok(String::new())
    }
}

/// Registry holding a single entry with the given inputs. The input slice
/// is leaked; registration wants `'static` and tests are short-lived.
fn registry_with(inputs: Vec<InputSpec>) -> SolutionRegistry {
    let inputs: &'static [InputSpec] = Box::leak(inputs.into_boxed_slice());
    let plugin = SolutionPlugin {
        day: 1,
        part: 1,
        variant: None,
        inputs,
        factory: || Box::new(Noop),
    };
    let mut builder = RegistryBuilder::new();
    builder.register(&plugin).unwrap();
    builder.build()
}

fn arb_kind() -> impl Strategy<Value = InputKind> {
    prop_oneof![
        Just(InputKind::Standard),
        Just(InputKind::Example),
        Just(InputKind::Challenge),
    ]
}

fn arb_spec() -> impl Strategy<Value = InputSpec> {
    (0..PATHS.len(), arb_kind(), any::<bool>()).prop_map(|(path, kind, default)| InputSpec {
        path: PATHS[path],
        kind,
        name: None,
        description: None,
        // embed the path so assertions can tell which spec was loaded
        source: InputSource::Embedded(PATHS[path]),
        default,
    })
}

fn arb_specs() -> impl Strategy<Value = Vec<InputSpec>> {
    prop::collection::vec(arb_spec(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_default_picks_flagged_then_standard_then_first(inputs in arb_specs()) {
        let expected = inputs
            .iter()
            .min_by_key(|spec| (!spec.default, spec.kind != InputKind::Standard))
            .map(|spec| spec.path.to_string())
            .unwrap();

        let registry = registry_with(inputs);
        let entry = registry.iter().next().unwrap();
        let resolved = resolve(entry, &InputSelection::Default).unwrap();
        prop_assert_eq!(resolved.text.as_ref(), expected.as_str());
    }

    #[test]
    fn prop_index_selector_picks_exact_spec(inputs in arb_specs(), index in 0usize..8) {
        let count = inputs.len();
        let expected = inputs.get(index).map(|spec| spec.path.to_string());

        let registry = registry_with(inputs);
        let entry = registry.iter().next().unwrap();
        let selection = InputSelection::Selector(index.to_string());
        match (resolve(entry, &selection), expected) {
            (Ok(resolved), Some(path)) => prop_assert_eq!(resolved.text.as_ref(), path.as_str()),
            (Err(InputError::IndexOutOfRange { index: i, count: c }), None) => {
                prop_assert_eq!(i, index);
                prop_assert_eq!(c, count);
            }
            (outcome, expected) => {
                panic!("index {index} resolved to {outcome:?}, expected {expected:?}")
            }
        }
    }

    #[test]
    fn prop_kind_selector_prefers_default_flag(inputs in arb_specs(), kind in arb_kind()) {
        let expected = inputs
            .iter()
            .find(|spec| spec.kind == kind && spec.default)
            .or_else(|| inputs.iter().find(|spec| spec.kind == kind))
            .map(|spec| spec.path.to_string());

        let registry = registry_with(inputs);
        let entry = registry.iter().next().unwrap();
        let selection = InputSelection::Selector(kind.to_string());
        match (resolve(entry, &selection), expected) {
            (Ok(resolved), Some(path)) => prop_assert_eq!(resolved.text.as_ref(), path.as_str()),
            (Err(InputError::NoneOfKind(k)), None) => prop_assert_eq!(k, kind),
            (outcome, expected) => {
                panic!("kind {kind} resolved to {outcome:?}, expected {expected:?}")
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_entry_without_inputs_reports_no_inputs() {
        let registry = registry_with(Vec::new());
        // empty slice is legal at registration time
        let entry = registry.iter().next().unwrap();
        match resolve(entry, &InputSelection::Default) {
            Err(InputError::NoInputs(label)) => assert_eq!(label, "day 01 part 1"),
            other => panic!("expected NoInputs, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_path_bypasses_registered_inputs() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "custom contents").unwrap();

        let registry = registry_with(vec![InputSpec {
            path: PATHS[0],
            kind: InputKind::Standard,
            name: None,
            description: None,
            source: InputSource::Embedded("registered contents"),
            default: true,
        }]);
        let entry = registry.iter().next().unwrap();
        let selection = InputSelection::CustomPath(file.path().to_path_buf());
        let resolved = resolve(entry, &selection).unwrap();
        assert_eq!(resolved.text, "custom contents");
    }
}
