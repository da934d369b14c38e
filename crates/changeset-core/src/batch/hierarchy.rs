//! Two-level (section/row) reconciliation.
//!
//! The outer script is diffed over whole sections. Deleted, inserted and
//! moved sections go into the section-level sets. Each substituted section
//! is diffed again at row level and the resulting row batch, scoped to that
//! section's destination index, is merged into one accumulated batch.

use crate::batch::flat::translate_flat;
use crate::batch::model::HierarchicalBatchDescriptor;
use crate::diff::compute_edits_by;
use crate::diff::model::{Edit, EditOperation};

/// Reconcile a section-level script under `PartialEq` rows.
pub fn translate_hierarchical<T>(edits: &[Edit<Vec<T>>]) -> HierarchicalBatchDescriptor
where
    T: PartialEq + Clone,
{
    translate_hierarchical_by(edits, |a: &T, b: &T| a == b)
}

/// Reconcile a section-level script, comparing rows with `equals`.
///
/// Moved sections are treated as unchanged and are not diffed at row
/// level. Row batches from every substituted section survive in the result.
pub fn translate_hierarchical_by<T, F>(
    edits: &[Edit<Vec<T>>],
    equals: F,
) -> HierarchicalBatchDescriptor
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut batch = HierarchicalBatchDescriptor::default();

    for edit in edits {
        match &edit.operation {
            EditOperation::Deletion { origin } => {
                batch.section_deletions.insert(*origin);
            }
            EditOperation::Insertion { destination } => {
                batch.section_insertions.insert(*destination);
            }
            EditOperation::Move {
                origin,
                destination,
            } => {
                batch.section_deletions.insert(*origin);
                batch.section_insertions.insert(*destination);
            }
            EditOperation::Substitution {
                destination,
                old_value,
            } => {
                let row_edits = compute_edits_by(old_value, &edit.value, &equals);
                tracing::debug!(
                    section = *destination,
                    edit_count = row_edits.len(),
                    "reconciled substituted section"
                );
                batch.rows.merge(translate_flat(&row_edits, *destination));
            }
        }
    }

    batch
}
