//! Core types shared across the Changeset crates
//!
//! This crate provides the vocabulary used by the diff engine, its
//! logging facility and the CLI:
//!
//! - **Addressing types**: IndexPath, Coordinate
//! - **Schema constants**: Canonical field keys and event names

pub mod address;
pub mod schema;

pub use address::{Coordinate, IndexPath};
