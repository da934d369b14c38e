//! Edit script types.
//!
//! An [`Edit`] pairs an [`EditOperation`] with the element it concerns. The
//! operation carries the indices, each in its own coordinate space: origin
//! indices address the sequence before the update, destination indices the
//! sequence after it.

use serde::{Deserialize, Serialize};

/// A single classified change between two sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOperation<T> {
    /// Element present only in the origin
    Deletion {
        /// Position in the origin sequence
        origin: usize,
    },
    /// Element present only in the destination
    Insertion {
        /// Position in the destination sequence
        destination: usize,
    },
    /// Aligned slot whose value changed in place
    Substitution {
        /// Position in the destination sequence
        destination: usize,
        /// The origin value that occupied the slot
        old_value: T,
    },
    /// Unchanged element relocated from one position to another
    Move {
        /// Position in the origin sequence
        origin: usize,
        /// Position in the destination sequence
        destination: usize,
    },
}

/// An operation together with the element it concerns.
///
/// `value` is the removed element for a deletion and the destination
/// element for every other operation. For a substitution this makes both
/// sides available, which is what nested (section/row) reconciliation
/// diffs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit<T> {
    pub operation: EditOperation<T>,
    pub value: T,
}

/// Ordered list of edits, ascending by alignment position.
pub type EditScript<T> = Vec<Edit<T>>;

impl<T> Edit<T> {
    pub fn deletion(origin: usize, value: T) -> Self {
        Self {
            operation: EditOperation::Deletion { origin },
            value,
        }
    }

    pub fn insertion(destination: usize, value: T) -> Self {
        Self {
            operation: EditOperation::Insertion { destination },
            value,
        }
    }

    pub fn substitution(destination: usize, old_value: T, value: T) -> Self {
        Self {
            operation: EditOperation::Substitution {
                destination,
                old_value,
            },
            value,
        }
    }

    pub fn relocation(origin: usize, destination: usize, value: T) -> Self {
        Self {
            operation: EditOperation::Move {
                origin,
                destination,
            },
            value,
        }
    }

    /// Origin index removed by this edit, if any
    pub fn origin(&self) -> Option<usize> {
        match self.operation {
            EditOperation::Deletion { origin } | EditOperation::Move { origin, .. } => Some(origin),
            EditOperation::Insertion { .. } | EditOperation::Substitution { .. } => None,
        }
    }

    /// Destination index written by this edit, if any
    pub fn destination(&self) -> Option<usize> {
        match self.operation {
            EditOperation::Insertion { destination }
            | EditOperation::Substitution { destination, .. }
            | EditOperation::Move { destination, .. } => Some(destination),
            EditOperation::Deletion { .. } => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self.operation, EditOperation::Move { .. })
    }

    /// Short lowercase name of the operation
    pub fn kind(&self) -> &'static str {
        match self.operation {
            EditOperation::Deletion { .. } => "deletion",
            EditOperation::Insertion { .. } => "insertion",
            EditOperation::Substitution { .. } => "substitution",
            EditOperation::Move { .. } => "move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_per_operation() {
        let deletion = Edit::deletion(3, 'a');
        assert_eq!(deletion.origin(), Some(3));
        assert_eq!(deletion.destination(), None);

        let insertion = Edit::insertion(1, 'b');
        assert_eq!(insertion.origin(), None);
        assert_eq!(insertion.destination(), Some(1));

        let substitution = Edit::substitution(2, 'c', 'd');
        assert_eq!(substitution.origin(), None);
        assert_eq!(substitution.destination(), Some(2));

        let relocation = Edit::relocation(4, 0, 'e');
        assert_eq!(relocation.origin(), Some(4));
        assert_eq!(relocation.destination(), Some(0));
        assert!(relocation.is_move());
    }

    #[test]
    fn test_serialized_operation_is_tagged() {
        let edit = Edit::substitution(0, 'k', 's');
        let json = serde_json::to_value(&edit).unwrap();

        assert_eq!(json["operation"]["kind"], "substitution");
        assert_eq!(json["operation"]["destination"], 0);
        assert_eq!(json["operation"]["old_value"], "k");
        assert_eq!(json["value"], "s");
    }
}
