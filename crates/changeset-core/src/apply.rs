//! Applying batches and scripts to concrete sequences.
//!
//! These functions play the part of the structural-update consumer: they
//! take the origin snapshot and rebuild the destination from a batch (or
//! directly from a script) following the coordinate-space contract:
//!
//! 1. Remove deletion rows, highest first, against the origin
//! 2. Insert rows, lowest first, at their destination positions
//! 3. Refresh update rows from the destination
//!
//! Each call either returns the complete rebuilt sequence or an error;
//! nothing partial escapes.

use crate::batch::model::{BatchDescriptor, HierarchicalBatchDescriptor};
use crate::diff::model::{Edit, EditOperation};
use crate::errors::{ChangesetError, Result};
use changeset_core_types::{Coordinate, IndexPath};
use std::collections::BTreeSet;

/// Rebuild `destination` from `origin` using a flat batch scoped to `section`.
///
/// `destination` supplies the content for inserted and updated rows, as a
/// consumer whose backing data was already swapped would read it.
///
/// # Errors
/// * `SectionMismatch` - a path in the batch belongs to another section
/// * `IndexOutOfRange` - a row does not address the sequence it is applied to
pub fn apply_batch<T: Clone>(
    origin: &[T],
    batch: &BatchDescriptor,
    destination: &[T],
    section: usize,
) -> Result<Vec<T>> {
    let all_paths = batch
        .deletions
        .iter()
        .chain(&batch.insertions)
        .chain(&batch.updates);
    for path in all_paths {
        if path.section != section {
            return Err(ChangesetError::SectionMismatch {
                expected: section,
                found: path.section,
            });
        }
    }

    let deletions: BTreeSet<usize> = batch.deletions.iter().map(|p| p.row).collect();
    let insertions = rows_from(&batch.insertions, destination)?;
    let updates = rows_from(&batch.updates, destination)?;

    rebuild(origin, &deletions, insertions, updates)
}

/// Rebuild two-level data from a hierarchical batch.
///
/// Sections are removed and inserted first; the row batch of every touched
/// section is then applied to the section now sitting at that destination
/// index.
///
/// # Errors
/// * `IndexOutOfRange` - a section or row index does not address its sequence
pub fn apply_hierarchical_batch<T: Clone>(
    origin: &[Vec<T>],
    batch: &HierarchicalBatchDescriptor,
    destination: &[Vec<T>],
) -> Result<Vec<Vec<T>>> {
    let inserted_sections = batch
        .section_insertions
        .iter()
        .map(|&section| {
            destination
                .get(section)
                .map(|rows| (section, rows.clone()))
                .ok_or(ChangesetError::IndexOutOfRange {
                    coordinate: Coordinate::Destination,
                    index: section,
                    len: destination.len(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut sections = rebuild(
        origin,
        &batch.section_deletions,
        inserted_sections,
        Vec::new(),
    )?;

    for section in batch.rows.sections() {
        let out_of_range = |len| ChangesetError::IndexOutOfRange {
            coordinate: Coordinate::Destination,
            index: section,
            len,
        };
        let current = sections
            .get(section)
            .ok_or_else(|| out_of_range(sections.len()))?;
        let target = destination
            .get(section)
            .ok_or_else(|| out_of_range(destination.len()))?;

        let rebuilt = apply_batch(current, &batch.rows.in_section(section), target, section)?;
        sections[section] = rebuilt;
    }

    Ok(sections)
}

/// Rebuild the destination from `origin` using only the values carried by
/// the script.
///
/// # Errors
/// * `DuplicateIndex` - two edits remove the same origin index or write the
///   same destination index
/// * `IndexOutOfRange` - an index does not address the sequence it is applied to
pub fn apply_edits<T: Clone>(origin: &[T], edits: &[Edit<T>]) -> Result<Vec<T>> {
    let mut deletions = BTreeSet::new();
    let mut insertions = Vec::new();
    let mut updates = Vec::new();

    for edit in edits {
        if let Some(index) = edit.origin() {
            if !deletions.insert(index) {
                return Err(ChangesetError::DuplicateIndex {
                    coordinate: Coordinate::Origin,
                    index,
                });
            }
        }
        match edit.operation {
            EditOperation::Insertion { destination } | EditOperation::Move { destination, .. } => {
                insertions.push((destination, edit.value.clone()));
            }
            EditOperation::Substitution { destination, .. } => {
                updates.push((destination, edit.value.clone()));
            }
            EditOperation::Deletion { .. } => {}
        }
    }

    insertions.sort_by_key(|(index, _)| *index);
    if let Some(index) = first_repeat(&insertions) {
        return Err(ChangesetError::DuplicateIndex {
            coordinate: Coordinate::Destination,
            index,
        });
    }

    rebuild(origin, &deletions, insertions, updates)
}

/// Look up the destination value for every row of `paths`.
fn rows_from<T: Clone>(paths: &BTreeSet<IndexPath>, destination: &[T]) -> Result<Vec<(usize, T)>> {
    paths
        .iter()
        .map(|path| {
            destination
                .get(path.row)
                .map(|value| (path.row, value.clone()))
                .ok_or(ChangesetError::IndexOutOfRange {
                    coordinate: Coordinate::Destination,
                    index: path.row,
                    len: destination.len(),
                })
        })
        .collect()
}

fn first_repeat<T>(sorted: &[(usize, T)]) -> Option<usize> {
    sorted
        .windows(2)
        .find(|pair| pair[0].0 == pair[1].0)
        .map(|pair| pair[0].0)
}

/// Delete (descending), insert (ascending by index), then overwrite.
fn rebuild<T: Clone>(
    origin: &[T],
    deletions: &BTreeSet<usize>,
    insertions: Vec<(usize, T)>,
    updates: Vec<(usize, T)>,
) -> Result<Vec<T>> {
    if let Some(&index) = deletions.iter().next_back() {
        if index >= origin.len() {
            return Err(ChangesetError::IndexOutOfRange {
                coordinate: Coordinate::Origin,
                index,
                len: origin.len(),
            });
        }
    }

    let mut working = origin.to_vec();
    for &index in deletions.iter().rev() {
        working.remove(index);
    }

    for (index, value) in insertions {
        if index > working.len() {
            return Err(ChangesetError::IndexOutOfRange {
                coordinate: Coordinate::Destination,
                index,
                len: working.len(),
            });
        }
        working.insert(index, value);
    }

    for (index, value) in updates {
        let len = working.len();
        let slot = working
            .get_mut(index)
            .ok_or(ChangesetError::IndexOutOfRange {
                coordinate: Coordinate::Destination,
                index,
                len,
            })?;
        *slot = value;
    }

    Ok(working)
}
