use crate::diff::model::{Edit, EditOperation};
use crate::errors::{ChangesetError, Result};
use changeset_core_types::Coordinate;
use std::collections::BTreeSet;

/// Validate an edit script against the lengths of the two sequences it
/// claims to connect.
///
/// Checks, in order of discovery:
///
/// 1. Every origin index (deletions, move origins) addresses the origin
/// 2. No origin index is removed twice
/// 3. Every destination index (insertions, substitutions, move
///    destinations) addresses the destination
/// 4. Destination indices are strictly ascending in script order
/// 5. Removals and insertions account exactly for the length change
///
/// Scripts produced by [`compute_edits`](crate::diff::compute_edits) always
/// pass; this exists for scripts that were built by hand, deserialized or
/// transformed.
///
/// # Errors
/// Returns the first violation encountered:
/// * `IndexOutOfRange` - an index does not address its sequence
/// * `DuplicateIndex` - an origin index is removed twice
/// * `UnorderedScript` - destination indices go backwards
/// * `LengthMismatch` - the script does not produce `destination_len` elements
pub fn validate_script<T>(
    edits: &[Edit<T>],
    origin_len: usize,
    destination_len: usize,
) -> Result<()> {
    let mut removed = BTreeSet::new();
    let mut inserted = 0usize;
    let mut previous: Option<usize> = None;

    for (position, edit) in edits.iter().enumerate() {
        if let Some(origin) = edit.origin() {
            if origin >= origin_len {
                return Err(ChangesetError::IndexOutOfRange {
                    coordinate: Coordinate::Origin,
                    index: origin,
                    len: origin_len,
                });
            }
            if !removed.insert(origin) {
                return Err(ChangesetError::DuplicateIndex {
                    coordinate: Coordinate::Origin,
                    index: origin,
                });
            }
        }

        if let Some(destination) = edit.destination() {
            if destination >= destination_len {
                return Err(ChangesetError::IndexOutOfRange {
                    coordinate: Coordinate::Destination,
                    index: destination,
                    len: destination_len,
                });
            }
            if let Some(previous) = previous {
                if destination <= previous {
                    return Err(ChangesetError::UnorderedScript {
                        position,
                        destination,
                        previous,
                    });
                }
            }
            previous = Some(destination);
        }

        if matches!(
            edit.operation,
            EditOperation::Insertion { .. } | EditOperation::Move { .. }
        ) {
            inserted += 1;
        }
    }

    let reconstructed_len = origin_len - removed.len() + inserted;
    if reconstructed_len != destination_len {
        return Err(ChangesetError::LengthMismatch {
            origin_len,
            destination_len,
            reconstructed_len,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_edits;

    #[test]
    fn test_computed_script_is_valid() {
        let origin: Vec<char> = "64927513".chars().collect();
        let destination: Vec<char> = "917546832".chars().collect();
        let edits = compute_edits(&origin, &destination);

        assert!(validate_script(&edits, origin.len(), destination.len()).is_ok());
    }

    #[test]
    fn test_origin_out_of_range() {
        let edits = vec![Edit::deletion(3, 'a')];

        let result = validate_script(&edits, 3, 2);
        assert!(matches!(
            result,
            Err(ChangesetError::IndexOutOfRange {
                coordinate: Coordinate::Origin,
                index: 3,
                len: 3
            })
        ));
    }

    #[test]
    fn test_destination_out_of_range() {
        let edits = vec![Edit::insertion(1, 'a')];

        let result = validate_script(&edits, 0, 1);
        assert!(matches!(
            result,
            Err(ChangesetError::IndexOutOfRange {
                coordinate: Coordinate::Destination,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_origin() {
        let edits = vec![Edit::deletion(0, 'a'), Edit::relocation(0, 1, 'a')];

        let result = validate_script(&edits, 2, 2);
        assert_eq!(
            result,
            Err(ChangesetError::DuplicateIndex {
                coordinate: Coordinate::Origin,
                index: 0
            })
        );
    }

    #[test]
    fn test_unordered_destinations() {
        let edits = vec![Edit::insertion(2, 'a'), Edit::substitution(1, 'b', 'c')];

        let result = validate_script(&edits, 2, 3);
        assert_eq!(
            result,
            Err(ChangesetError::UnorderedScript {
                position: 1,
                destination: 1,
                previous: 2
            })
        );
    }

    #[test]
    fn test_length_mismatch() {
        let edits = vec![Edit::insertion(0, 'a')];

        let result = validate_script(&edits, 2, 2);
        assert_eq!(
            result,
            Err(ChangesetError::LengthMismatch {
                origin_len: 2,
                destination_len: 2,
                reconstructed_len: 3
            })
        );
    }
}
