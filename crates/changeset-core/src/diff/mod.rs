//! Sequence diff engine.
//!
//! Computes the minimal edit script between two snapshots of an ordered
//! sequence and classifies each edit as a deletion, insertion, in-place
//! substitution or move.
//!
//! ## Entry point
//!
//! ```
//! use changeset_core::diff::compute_edits;
//!
//! let origin: Vec<char> = "kitten".chars().collect();
//! let destination: Vec<char> = "sitting".chars().collect();
//! let edits = compute_edits(&origin, &destination);
//! assert_eq!(edits.len(), 3);
//! ```
//!
//! ## Guarantees
//!
//! - **Minimality**: the deletions, insertions and substitutions of the raw
//!   script number exactly the edit distance.
//! - **Determinism**: identical inputs produce identical scripts, including
//!   move pairings.
//! - **Identity**: diffing a sequence against itself yields an empty script.
//! - **Move soundness**: a move is only reported between equal values.
//!
//! All functions are pure and reentrant; the cost is `O(m·n)` time and
//! memory per call.

pub mod distance;
pub mod human_summary;
pub mod model;
pub mod moves;

pub use distance::{edit_distance, edit_distance_by, edit_script_by};
pub use human_summary::{render_batch, render_hierarchical_batch, render_script};
pub use model::{Edit, EditOperation, EditScript};
pub use moves::{detect_moves, detect_moves_by};

/// Compute the edit script from `origin` to `destination`, moves included.
pub fn compute_edits<T>(origin: &[T], destination: &[T]) -> EditScript<T>
where
    T: PartialEq + Clone,
{
    compute_edits_by(origin, destination, |a, b| a == b)
}

/// Compute the edit script from `origin` to `destination` under a
/// caller-supplied equality, moves included.
///
/// The predicate must behave like an equivalence relation; an inconsistent
/// predicate still yields a script, but not a minimal or reproducible one.
pub fn compute_edits_by<T, F>(origin: &[T], destination: &[T], equals: F) -> EditScript<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let raw = edit_script_by(origin, destination, &equals);
    detect_moves_by(raw, &equals)
}
