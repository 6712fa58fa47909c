//! Name-keyed selection index backing the picker.

use super::types::AppEntry;
use std::collections::HashMap;

/// Maps display names to catalog entries.
///
/// Rebuilt in full from each fetch result; entries from earlier fetches never
/// survive a [`SelectionIndex::replace`]. Duplicate names keep the last entry.
#[derive(Debug, Clone, Default)]
pub struct SelectionIndex {
    entries: HashMap<String, AppEntry>,
}

impl SelectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current contents and indexes `catalog`.
    pub fn replace(&mut self, catalog: &[AppEntry]) {
        self.entries = catalog
            .iter()
            .map(|entry| (entry.name.clone(), entry.clone()))
            .collect();
    }

    /// Looks up an entry by display name.
    pub fn resolve(&self, name: &str) -> Option<&AppEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
