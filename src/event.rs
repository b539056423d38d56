use indexmap::IndexMap;
use itertools::Itertools;

use crate::tokens::{canonical_name, TokenEntry};

/// The token-creation event being resolved: how many of each token would be created.
///
/// Adding and setting are kept separate. Most effects layer more tokens on top of the event,
/// while replacement effects redefine a count outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMap {
    tokens: IndexMap<String, usize>,
}

impl EventMap {
    /// The starting event. Names are canonicalized so that spelling variants of one token
    /// share a count.
    pub fn from_entries<'e>(entries: impl IntoIterator<Item = &'e TokenEntry>) -> Self {
        let mut event = Self::default();
        for entry in entries {
            event.add(&canonical_name(&entry.name), entry.count);
        }

        event
    }

    pub fn add(&mut self, name: &str, count: usize) {
        let current = self.tokens.entry(name.to_string()).or_default();
        *current = current.saturating_add(count);
    }

    pub fn set(&mut self, name: &str, count: usize) {
        self.tokens.insert(name.to_string(), count);
    }

    pub fn get(&self, name: &str) -> usize {
        self.tokens.get(name).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.tokens
            .values()
            .fold(0usize, |total, count| total.saturating_add(*count))
    }

    pub fn multiply(&mut self, factor: usize) {
        for count in self.tokens.values_mut() {
            *count = count.saturating_mul(factor);
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Nonzero counts, ordered by name.
    pub fn into_sorted(self) -> Vec<(String, usize)> {
        self.tokens
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .sorted_by(|(left, _), (right, _)| left.cmp(right))
            .collect_vec()
    }
}
