//! Human-readable summaries of edit scripts and batches.

use crate::batch::model::{BatchDescriptor, HierarchicalBatchDescriptor};
use crate::diff::model::{Edit, EditOperation};
use changeset_core_types::IndexPath;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Render one line per edit, in script order.
///
/// Elements are shown with their `Debug` form.
pub fn render_script<T: Debug>(edits: &[Edit<T>]) -> String {
    if edits.is_empty() {
        return "_No changes._\n".to_string();
    }

    let mut out = String::new();
    for edit in edits {
        let line = match &edit.operation {
            EditOperation::Deletion { origin } => {
                format!("- delete {:?} at origin {}", edit.value, origin)
            }
            EditOperation::Insertion { destination } => {
                format!("- insert {:?} at destination {}", edit.value, destination)
            }
            EditOperation::Substitution {
                destination,
                old_value,
            } => format!(
                "- substitute {:?} -> {:?} at destination {}",
                old_value, edit.value, destination
            ),
            EditOperation::Move {
                origin,
                destination,
            } => format!(
                "- move {:?} from origin {} to destination {}",
                edit.value, origin, destination
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render the three index sets of a flat batch.
pub fn render_batch(batch: &BatchDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("deletions (origin): {}\n", paths(&batch.deletions)));
    out.push_str(&format!(
        "insertions (destination): {}\n",
        paths(&batch.insertions)
    ));
    out.push_str(&format!(
        "updates (destination): {}\n",
        paths(&batch.updates)
    ));
    out
}

/// Render section-level sets followed by the row batch of each touched section.
pub fn render_hierarchical_batch(batch: &HierarchicalBatchDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "section deletions (origin): {}\n",
        indices(&batch.section_deletions)
    ));
    out.push_str(&format!(
        "section insertions (destination): {}\n",
        indices(&batch.section_insertions)
    ));

    let sections = batch.rows.sections();
    if sections.is_empty() {
        out.push_str("rows: none\n");
        return out;
    }

    for section in sections {
        out.push_str(&format!("rows of section {}:\n", section));
        for line in render_batch(&batch.rows.in_section(section)).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn paths(set: &BTreeSet<IndexPath>) -> String {
    let items: Vec<String> = set.iter().map(IndexPath::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn indices(set: &BTreeSet<usize>) -> String {
    let items: Vec<String> = set.iter().map(usize::to_string).collect();
    format!("[{}]", items.join(", "))
}
