//! Changeset Core - edit scripts and structural update batches
//!
//! This crate computes how one snapshot of an ordered sequence became
//! another and describes the change in the form a list or grid consumer
//! needs to animate it, including:
//! - Minimal edit scripts (Wagner–Fischer) with in-place substitutions
//! - Move detection that pairs deletions with equal insertions
//! - Flat batch translation into origin/destination index sets
//! - Two-level (section/row) reconciliation with merged row batches
//! - Script validation and batch application against concrete sequences
//! - Snapshot replay with built-in demo fixtures
//!
//! Diffing and translation are pure; only validation, application and
//! replay loading can fail.

pub mod apply;
pub mod batch;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod replay;
pub mod rules;

pub use changeset_core_types as core_types;

// Re-export commonly used types
pub use apply::{apply_batch, apply_edits, apply_hierarchical_batch};
pub use batch::{
    translate_flat, translate_hierarchical, translate_hierarchical_by, BatchDescriptor,
    HierarchicalBatchDescriptor,
};
pub use changeset_core_types::{Coordinate, IndexPath};
pub use diff::{compute_edits, compute_edits_by, edit_distance, Edit, EditOperation, EditScript};
pub use errors::{ChangesetError, CsError, CsErrorKind, Result};
pub use replay::{ReplayQueue, ReplayStep};
pub use rules::validate_script;
