//! Shared helpers for changeset-core integration tests.

use changeset_core::{apply_batch, compute_edits, translate_flat};

/// Split a string into a character sequence
#[allow(dead_code)]
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// One section per string, one row per character
#[allow(dead_code)]
pub fn sections(items: &[&str]) -> Vec<Vec<char>> {
    items.iter().map(|item| chars(item)).collect()
}

/// Owned string rows for a single section
#[allow(dead_code)]
pub fn rows(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Diff, translate and apply a flat pair, returning the rebuilt sequence
#[allow(dead_code)]
pub fn round_trip(origin: &[char], destination: &[char]) -> Vec<char> {
    let batch = translate_flat(&compute_edits(origin, destination), 0);
    apply_batch(origin, &batch, destination, 0).unwrap()
}
