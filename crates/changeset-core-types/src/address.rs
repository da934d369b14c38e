//! Addressing types for batch updates
//!
//! An [`IndexPath`] names a row inside a section. Every index carried by a
//! batch belongs to exactly one [`Coordinate`] space: deletions are addressed
//! against the structure before the update, insertions and updates against
//! the structure after it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The coordinate space an index is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    /// Positions in the origin (pre-update) sequence
    Origin,
    /// Positions in the destination (post-update) sequence
    Destination,
}

impl Coordinate {
    /// Get the lowercase name of this coordinate space
    pub fn as_str(&self) -> &'static str {
        match self {
            Coordinate::Origin => "origin",
            Coordinate::Destination => "destination",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-level address of a row within a section
///
/// Ordered by section first, then row, so sets of paths iterate in the
/// order a consumer walks its structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    /// Create a path to `row` in `section`
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_path_orders_by_section_then_row() {
        let mut paths = vec![
            IndexPath::new(1, 0),
            IndexPath::new(0, 5),
            IndexPath::new(0, 1),
        ];
        paths.sort();

        assert_eq!(
            paths,
            vec![
                IndexPath::new(0, 1),
                IndexPath::new(0, 5),
                IndexPath::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_index_path_display() {
        assert_eq!(IndexPath::new(2, 7).to_string(), "2:7");
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::Origin.to_string(), "origin");
        assert_eq!(Coordinate::Destination.to_string(), "destination");
    }

    #[test]
    fn test_serialization() {
        let path = IndexPath::new(3, 4);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"{"section":3,"row":4}"#);
        let deserialized: IndexPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, deserialized);

        let json = serde_json::to_string(&Coordinate::Destination).unwrap();
        assert_eq!(json, r#""destination""#);
    }
}
