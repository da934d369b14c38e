//! Replaying the built-in fixtures and JSON scripts end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use changeset_core::replay::fixtures::{
    flat_queue, hierarchical_queue, DEFAULT_DATA, DEFAULT_HIERARCHICAL_DATA, TEST_DATA,
    TEST_HIERARCHICAL_DATA,
};
use changeset_core::replay::{flat_queue_from_json, hierarchical_queue_from_json};
use changeset_core::{apply_batch, apply_hierarchical_batch, ChangesetError};
use common::{chars, sections};
use std::collections::BTreeSet;

#[test]
fn test_flat_fixtures_round_trip() {
    let mut queue = flat_queue();
    let mut previous = chars(DEFAULT_DATA);

    let steps = queue.drain();
    assert_eq!(steps.len(), TEST_DATA.len());

    for (index, (step, snapshot)) in steps.iter().zip(TEST_DATA).enumerate() {
        let destination = chars(snapshot);
        assert_eq!(step.step, index + 1);
        assert_eq!(step.is_complete, index + 1 == TEST_DATA.len());
        assert_eq!(
            apply_batch(&previous, &step.batch, &destination, 0).unwrap(),
            destination
        );
        previous = destination;
    }
}

#[test]
fn test_hierarchical_fixtures_round_trip() {
    let mut queue = hierarchical_queue();
    let mut previous = sections(&DEFAULT_HIERARCHICAL_DATA);

    let steps = queue.drain_hierarchical();
    assert_eq!(steps.len(), TEST_HIERARCHICAL_DATA.len());

    for (step, items) in steps.iter().zip(TEST_HIERARCHICAL_DATA) {
        let destination = sections(items);
        assert_eq!(
            apply_hierarchical_batch(&previous, &step.batch, &destination).unwrap(),
            destination
        );
        previous = destination;
    }
    assert!(queue.is_complete());
}

#[test]
fn test_hierarchical_fixtures_empty_and_refill() {
    let steps = hierarchical_queue().drain_hierarchical();

    // ["1"] -> []
    let emptied = &steps[10];
    assert_eq!(emptied.batch.section_deletions, BTreeSet::from([0]));
    assert!(emptied.batch.section_insertions.is_empty());

    // [] -> ["123", "ab"]
    let refilled = &steps[11];
    assert_eq!(refilled.batch.section_insertions, BTreeSet::from([0, 1]));
    assert!(refilled.batch.rows.is_empty());
    assert!(refilled.is_complete);
}

#[test]
fn test_first_hierarchical_step_adds_one_row() {
    let step = hierarchical_queue().step_hierarchical().unwrap();

    // ["123", "ab"] -> ["123", "abc"]
    assert!(step.batch.section_deletions.is_empty());
    assert!(step.batch.section_insertions.is_empty());
    assert_eq!(step.batch.rows.sections(), BTreeSet::from([1]));
    assert_eq!(step.batch.rows.insertions.len(), 1);
}

#[test]
fn test_json_flat_replay() {
    let mut queue =
        flat_queue_from_json(r#"{"initial": "kitten", "snapshots": ["sitting", "kitten"]}"#)
            .unwrap();

    let steps = queue.drain();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].edits.len(), 3);
    assert_eq!(queue.current(), chars("kitten").as_slice());
}

#[test]
fn test_json_hierarchical_replay() {
    let mut queue = hierarchical_queue_from_json(
        r#"{"initial": [["a"], ["x"]], "snapshots": []}"#,
    );
    assert!(matches!(queue, Err(ChangesetError::Serialization { .. })));

    queue = hierarchical_queue_from_json(
        r#"{"initial": ["a", "x"], "snapshots": [["b", "y"]]}"#,
    );
    let steps = queue.unwrap().drain_hierarchical();

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].batch.rows.updates.len(), 2);
}

#[test]
fn test_json_without_snapshots_is_rejected() {
    let err = flat_queue_from_json(r#"{"initial": "abc", "snapshots": []}"#).unwrap_err();

    assert_eq!(
        err,
        ChangesetError::InvalidReplayData {
            reason: "no snapshots to replay".to_string()
        }
    );
}
