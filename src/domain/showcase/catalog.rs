// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered record set.

use super::record::{TabId, TabRecord};
use crate::domain::error::ShowcaseError;
use std::collections::HashSet;

/// Validated record set, in declaration order.
///
/// A `Catalog` is never empty and never holds two records with the same
/// id. It cannot be mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<TabRecord>,
}

impl Catalog {
    /// Validates `records` and freezes them.
    ///
    /// # Errors
    ///
    /// - [`ShowcaseError::EmptyContentSet`] when `records` is empty
    /// - [`ShowcaseError::DuplicateTabId`] for the first repeated id
    pub fn new(records: Vec<TabRecord>) -> Result<Self, ShowcaseError> {
        if records.is_empty() {
            return Err(ShowcaseError::EmptyContentSet);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(ShowcaseError::DuplicateTabId(record.id.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Records in declaration order. Never empty.
    #[must_use]
    pub fn records(&self) -> &[TabRecord] {
        &self.records
    }

    /// The default selection.
    #[must_use]
    pub fn first(&self) -> &TabRecord {
        &self.records[0]
    }

    /// Declaration index of `id`, if it belongs to the set.
    #[must_use]
    pub fn index_of(&self, id: &TabId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &TabId) -> Option<&TabRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &TabId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TabId> {
        self.records.iter().map(|record| &record.id)
    }

    /// Every missing media reference across the set.
    pub fn media_issues(&self) -> Vec<ShowcaseError> {
        self.records.iter().flat_map(TabRecord::media_issues).collect()
    }
}
