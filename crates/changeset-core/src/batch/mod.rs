//! Batch translation.
//!
//! Turns an edit script into the index sets a list or grid consumer needs
//! to perform one atomic, incremental structural update.
//!
//! ## Coordinate spaces
//!
//! - Deletions (and move origins) address the structure **before** the
//!   update.
//! - Insertions, move destinations and updates address the structure
//!   **after** the update.
//!
//! ## Two-level data
//!
//! [`translate_hierarchical`] handles sequences of sections, re-diffing the
//! rows of every substituted section and merging all row batches.

pub mod flat;
pub mod hierarchy;
pub mod model;

pub use flat::translate_flat;
pub use hierarchy::{translate_hierarchical, translate_hierarchical_by};
pub use model::{BatchDescriptor, HierarchicalBatchDescriptor};
