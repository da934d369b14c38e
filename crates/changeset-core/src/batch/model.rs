//! Batch descriptor types.
//!
//! Sets are `BTreeSet`s so iteration (and serialization) order is
//! deterministic: deletions can be walked in reverse and insertions forward
//! without re-sorting.

use changeset_core_types::IndexPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index sets describing one atomic structural update.
///
/// `deletions` are origin coordinates; `insertions` and `updates` are
/// destination coordinates. A consumer must never mix the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDescriptor {
    /// Rows to remove, addressed in the pre-update structure
    pub deletions: BTreeSet<IndexPath>,
    /// Rows to insert, addressed in the post-update structure
    pub insertions: BTreeSet<IndexPath>,
    /// Rows to refresh in place, addressed in the post-update structure
    pub updates: BTreeSet<IndexPath>,
}

impl BatchDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty() && self.updates.is_empty()
    }

    /// Total number of paths across all three sets
    pub fn len(&self) -> usize {
        self.deletions.len() + self.insertions.len() + self.updates.len()
    }

    /// Fold `other` into this batch.
    ///
    /// Additive: paths already present are kept, so batches scoped to
    /// different sections accumulate instead of replacing each other.
    pub fn merge(&mut self, other: BatchDescriptor) {
        self.deletions.extend(other.deletions);
        self.insertions.extend(other.insertions);
        self.updates.extend(other.updates);
    }

    /// The part of this batch scoped to `section`
    pub fn in_section(&self, section: usize) -> BatchDescriptor {
        let bounds = IndexPath::new(section, 0)..=IndexPath::new(section, usize::MAX);
        BatchDescriptor {
            deletions: self.deletions.range(bounds.clone()).copied().collect(),
            insertions: self.insertions.range(bounds.clone()).copied().collect(),
            updates: self.updates.range(bounds).copied().collect(),
        }
    }

    /// Every section with at least one path in this batch
    pub fn sections(&self) -> BTreeSet<usize> {
        self.deletions
            .iter()
            .chain(&self.insertions)
            .chain(&self.updates)
            .map(|path| path.section)
            .collect()
    }
}

/// Section-level and row-level sets for two-level data.
///
/// Row paths in `rows` are scoped to the destination index of the section
/// whose content changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalBatchDescriptor {
    /// Sections to remove, addressed in the pre-update structure
    pub section_deletions: BTreeSet<usize>,
    /// Sections to insert, addressed in the post-update structure
    pub section_insertions: BTreeSet<usize>,
    /// Row changes inside sections that were substituted in place
    pub rows: BatchDescriptor,
}

impl HierarchicalBatchDescriptor {
    pub fn is_empty(&self) -> bool {
        self.section_deletions.is_empty()
            && self.section_insertions.is_empty()
            && self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_with_update(section: usize, row: usize) -> BatchDescriptor {
        let mut batch = BatchDescriptor::new();
        batch.updates.insert(IndexPath::new(section, row));
        batch
    }

    #[test]
    fn test_merge_keeps_both_sections() {
        let mut merged = batch_with_update(0, 0);
        merged.merge(batch_with_update(1, 0));

        assert_eq!(merged.updates.len(), 2);
        assert_eq!(merged.sections(), BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_merge_is_idempotent_for_same_paths() {
        let mut merged = batch_with_update(0, 3);
        merged.merge(batch_with_update(0, 3));

        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_in_section_filters_paths() {
        let mut batch = BatchDescriptor::new();
        batch.deletions.insert(IndexPath::new(0, 1));
        batch.deletions.insert(IndexPath::new(1, 1));
        batch.insertions.insert(IndexPath::new(1, 0));
        batch.updates.insert(IndexPath::new(2, 5));

        let section_one = batch.in_section(1);

        assert_eq!(section_one.deletions, BTreeSet::from([IndexPath::new(1, 1)]));
        assert_eq!(section_one.insertions, BTreeSet::from([IndexPath::new(1, 0)]));
        assert!(section_one.updates.is_empty());
        assert!(batch.in_section(3).is_empty());
    }

    #[test]
    fn test_hierarchical_empty() {
        let mut batch = HierarchicalBatchDescriptor::default();
        assert!(batch.is_empty());

        batch.rows.merge(batch_with_update(0, 0));
        assert!(!batch.is_empty());
    }
}
