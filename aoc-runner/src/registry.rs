//! Solution discovery and lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::RegistrationError;
use crate::input::InputSpec;
use crate::solution::{Solution, SolutionFactory, SolutionPlugin};

/// One registered solution with its selection key, inputs, and factory.
pub struct SolutionEntry {
    day: u8,
    part: u8,
    variant: Option<&'static str>,
    /// Lowercase selection token; canonical entries answer to "part<N>"
    token: String,
    inputs: &'static [InputSpec],
    factory: SolutionFactory,
}

impl SolutionEntry {
    fn from_plugin(plugin: &SolutionPlugin) -> SolutionEntry {
        let token = match plugin.variant {
            Some(name) => name.to_ascii_lowercase(),
            None => format!("part{}", plugin.part),
        };
        SolutionEntry {
            day: plugin.day,
            part: plugin.part,
            variant: plugin.variant,
            token,
            inputs: plugin.inputs,
            factory: plugin.factory,
        }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn part(&self) -> u8 {
        self.part
    }

    pub fn variant(&self) -> Option<&'static str> {
        self.variant
    }

    /// Whether this is an alternate take rather than the canonical
    /// solution of its part.
    pub fn is_variant(&self) -> bool {
        self.variant.is_some()
    }

    pub fn inputs(&self) -> &'static [InputSpec] {
        self.inputs
    }

    /// Whether `token` selects this entry's variant, case-insensitively.
    pub fn matches_variant(&self, token: &str) -> bool {
        self.token.eq_ignore_ascii_case(token)
    }

    /// Display label, e.g. `day 06 part 2 (xor)`.
    pub fn label(&self) -> String {
        match self.variant {
            Some(variant) => format!("day {:02} part {} ({variant})", self.day, self.part),
            None => format!("day {:02} part {}", self.day, self.part),
        }
    }

    /// Build a fresh solution instance.
    pub fn build(&self) -> Box<dyn Solution> {
        (self.factory)()
    }
}

/// Filter over the registry; `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SolutionFilter {
    pub day: Option<u8>,
    pub part: Option<u8>,
    pub variant: Option<String>,
}

impl SolutionFilter {
    pub fn matches(&self, entry: &SolutionEntry) -> bool {
        self.day.is_none_or(|day| day == entry.day)
            && self.part.is_none_or(|part| part == entry.part)
            && self
                .variant
                .as_deref()
                .is_none_or(|token| entry.matches_variant(token))
    }
}

/// Accumulates registrations, rejecting duplicate keys.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(u8, u8, String), SolutionEntry>,
}

impl RegistryBuilder {
    pub fn new() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Register one plugin record.
    pub fn register(&mut self, plugin: &SolutionPlugin) -> Result<(), RegistrationError> {
        let entry = SolutionEntry::from_plugin(plugin);
        let key = (entry.day, entry.part, entry.token.clone());
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(RegistrationError::Duplicate(entry.label())),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Register every plugin submitted through `inventory`.
    pub fn register_plugins(mut self) -> Result<RegistryBuilder, RegistrationError> {
        for plugin in inventory::iter::<SolutionPlugin>() {
            self.register(plugin)?;
        }
        Ok(self)
    }

    /// Freeze into a registry sorted by day, then part, with the canonical
    /// solution ahead of its variants and variants alphabetical.
    pub fn build(self) -> SolutionRegistry {
        let mut entries: Vec<SolutionEntry> = self.entries.into_values().collect();
        entries.sort_by(|a, b| {
            (a.day, a.part, a.is_variant())
                .cmp(&(b.day, b.part, b.is_variant()))
                .then_with(|| a.token.cmp(&b.token))
        });
        SolutionRegistry { entries }
    }
}

/// Immutable, sorted collection of registered solutions.
pub struct SolutionRegistry {
    entries: Vec<SolutionEntry>,
}

impl SolutionRegistry {
    /// Entries matching `filter`, in registry order.
    pub fn select(&self, filter: &SolutionFilter) -> Vec<&SolutionEntry> {
        self.entries.iter().filter(|entry| filter.matches(entry)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolutionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    struct Echo;

    impl Solution for Echo {
        fn run(&self, input: &str) -> Result<String, SolveError> {
            Ok(input.to_string())
        }
    }

    fn plugin(day: u8, part: u8, variant: Option<&'static str>) -> SolutionPlugin {
        SolutionPlugin {
            day,
            part,
            variant,
            inputs: &[],
            factory: || Box::new(Echo),
        }
    }

    fn registry(plugins: &[SolutionPlugin]) -> SolutionRegistry {
        let mut builder = RegistryBuilder::new();
        for plugin in plugins {
            builder.register(plugin).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register(&plugin(6, 2, Some("xor"))).unwrap();
        let err = builder.register(&plugin(6, 2, Some("XOR"))).unwrap_err();
        assert!(matches!(err, RegistrationError::Duplicate(label) if label.contains("day 06")));
    }

    #[test]
    fn test_canonical_answers_to_part_token() {
        let registry = registry(&[plugin(6, 2, None)]);
        let filter = SolutionFilter {
            day: Some(6),
            part: Some(2),
            variant: Some("part2".to_string()),
        };
        assert_eq!(registry.select(&filter).len(), 1);
    }

    #[test]
    fn test_variant_and_part_token_collide() {
        let mut builder = RegistryBuilder::new();
        builder.register(&plugin(6, 2, None)).unwrap();
        assert!(builder.register(&plugin(6, 2, Some("part2"))).is_err());
    }

    #[test]
    fn test_entries_sorted_canonical_first() {
        let registry = registry(&[
            plugin(6, 2, Some("xor")),
            plugin(6, 2, Some("bit-fields")),
            plugin(6, 2, None),
            plugin(6, 1, None),
            plugin(1, 1, None),
        ]);
        let labels: Vec<String> = registry.iter().map(SolutionEntry::label).collect();
        assert_eq!(
            labels,
            [
                "day 01 part 1",
                "day 06 part 1",
                "day 06 part 2",
                "day 06 part 2 (bit-fields)",
                "day 06 part 2 (xor)",
            ]
        );
    }

    #[test]
    fn test_filter_matches_day_and_part() {
        let registry = registry(&[plugin(1, 1, None), plugin(1, 2, None), plugin(2, 1, None)]);
        let all = SolutionFilter::default();
        assert_eq!(registry.select(&all).len(), 3);

        let day_one = SolutionFilter {
            day: Some(1),
            ..SolutionFilter::default()
        };
        assert_eq!(registry.select(&day_one).len(), 2);

        let part_two = SolutionFilter {
            day: Some(1),
            part: Some(2),
            variant: None,
        };
        assert_eq!(registry.select(&part_two).len(), 1);
    }

    #[test]
    fn test_variant_filter_is_case_insensitive() {
        let registry = registry(&[plugin(6, 2, Some("bit-fields")), plugin(6, 2, None)]);
        let filter = SolutionFilter {
            day: Some(6),
            part: Some(2),
            variant: Some("Bit-Fields".to_string()),
        };
        let selected = registry.select(&filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].variant(), Some("bit-fields"));
    }

    #[test]
    fn test_built_entry_runs() {
        let registry = registry(&[plugin(3, 1, None)]);
        let entry = registry.iter().next().unwrap();
        assert_eq!(entry.build().run("echo").unwrap(), "echo");
    }
}
