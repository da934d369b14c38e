//! Move detection.
//!
//! Pairs a deletion and an insertion of equal values into a single
//! [`EditOperation::Move`]. Deletions are visited in script order and each
//! claims the earliest unclaimed insertion of an equal value. The move
//! replaces the insertion in the script and the deletion is dropped, so the
//! script keeps its destination ordering.
//!
//! Substitutions are never paired: they change a slot in place.

use crate::diff::model::{Edit, EditOperation, EditScript};

/// Reclassify value-equal deletion/insertion pairs as moves.
pub fn detect_moves_by<T, F>(edits: EditScript<T>, equals: F) -> EditScript<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut slots: Vec<Option<Edit<T>>> = edits.into_iter().map(Some).collect();
    let mut moves = 0usize;

    for d in 0..slots.len() {
        let Some(deleted) = slots[d].as_ref() else {
            continue;
        };
        let EditOperation::Deletion { origin } = deleted.operation else {
            continue;
        };

        // An insertion turned into a move no longer matches, so it cannot be
        // claimed twice.
        let partner = slots.iter().enumerate().find_map(|(k, slot)| match slot {
            Some(Edit {
                operation: EditOperation::Insertion { destination },
                value,
            }) if equals(&deleted.value, value) => Some((k, *destination)),
            _ => None,
        });

        if let Some((k, destination)) = partner {
            slots[d] = None;
            if let Some(inserted) = slots[k].as_mut() {
                inserted.operation = EditOperation::Move {
                    origin,
                    destination,
                };
                moves += 1;
            }
        }
    }

    if moves > 0 {
        tracing::debug!(move_count = moves, "paired deletions and insertions into moves");
    }

    slots.into_iter().flatten().collect()
}

/// Move detection under `PartialEq`.
pub fn detect_moves<T: PartialEq>(edits: EditScript<T>) -> EditScript<T> {
    detect_moves_by(edits, |a, b| a == b)
}
