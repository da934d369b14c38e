//! Flat batch translation.

use crate::batch::model::BatchDescriptor;
use crate::diff::model::{Edit, EditOperation};
use changeset_core_types::IndexPath;

/// Partition an edit script into deletion, insertion and update paths
/// scoped to `section`.
///
/// - Deletions and move origins are origin coordinates.
/// - Insertions, move destinations and substitutions are destination
///   coordinates.
///
/// A consumer whose backing data already holds the destination applies the
/// deletions against the old structure, then the insertions, then refreshes
/// the updates.
pub fn translate_flat<T>(edits: &[Edit<T>], section: usize) -> BatchDescriptor {
    let mut batch = BatchDescriptor::new();

    for edit in edits {
        match &edit.operation {
            EditOperation::Deletion { origin } => {
                batch.deletions.insert(IndexPath::new(section, *origin));
            }
            EditOperation::Insertion { destination } => {
                batch.insertions.insert(IndexPath::new(section, *destination));
            }
            EditOperation::Move {
                origin,
                destination,
            } => {
                batch.deletions.insert(IndexPath::new(section, *origin));
                batch.insertions.insert(IndexPath::new(section, *destination));
            }
            EditOperation::Substitution { destination, .. } => {
                batch.updates.insert(IndexPath::new(section, *destination));
            }
        }
    }

    batch
}
