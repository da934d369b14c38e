//! Built-in demo snapshots.
//!
//! The flat series starts from `"changeset"`, runs through a set of digit
//! and letter shuffles chosen to produce moves, and returns to the start.
//! The hierarchical series edits a row, swaps the two sections, then
//! shrinks everything down to no sections at all before restoring the
//! default.

use super::ReplayQueue;

pub const DEFAULT_DATA: &str = "changeset";

pub const TEST_DATA: [&str; 7] = [
    "64927513",
    "917546832",
    "8C9A2574361B",
    "897A34B215C6",
    "5198427",
    "768952413",
    DEFAULT_DATA,
];

pub const DEFAULT_HIERARCHICAL_DATA: [&str; 2] = ["123", "ab"];

pub const TEST_HIERARCHICAL_DATA: [&[&str]; 12] = [
    &["123", "abc"],
    &["123", "abd"],
    &["123", "abe"],
    &["abe", "123"],
    &["123", "abe"],
    &["123", "ab"],
    &["123", "a"],
    &["123"],
    &["12"],
    &["1"],
    &[],
    &["123", "ab"],
];

/// Split a string into its characters.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// One section per string, one row per character.
pub fn sections(items: &[&str]) -> Vec<Vec<char>> {
    items.iter().map(|item| chars(item)).collect()
}

/// Queue holding the flat demo series.
pub fn flat_queue() -> ReplayQueue<char> {
    let mut queue = ReplayQueue::new(chars(DEFAULT_DATA));
    queue.extend(TEST_DATA.iter().map(|s| chars(s)));
    queue
}

/// Queue holding the hierarchical demo series.
pub fn hierarchical_queue() -> ReplayQueue<Vec<char>> {
    let mut queue = ReplayQueue::new(sections(&DEFAULT_HIERARCHICAL_DATA));
    queue.extend(TEST_HIERARCHICAL_DATA.iter().map(|items| sections(items)));
    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_series_returns_to_default() {
        let mut queue = flat_queue();
        assert_eq!(queue.remaining(), TEST_DATA.len());

        queue.drain();
        assert_eq!(queue.current(), chars(DEFAULT_DATA).as_slice());
    }

    #[test]
    fn test_hierarchical_series_passes_through_empty() {
        let queue = hierarchical_queue();
        assert_eq!(queue.remaining(), 12);
        assert!(TEST_HIERARCHICAL_DATA.iter().any(|items| items.is_empty()));
    }

    #[test]
    fn test_sections_splits_rows() {
        assert_eq!(
            sections(&["12", ""]),
            vec![vec!['1', '2'], Vec::<char>::new()]
        );
    }
}
