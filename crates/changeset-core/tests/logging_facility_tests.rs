#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use changeset_core::errors::ChangesetError;
use changeset_core::logging_facility::test_capture::init_test_capture;
use changeset_core::ReplayQueue;
use changeset_core::{log_op_end, log_op_error, log_op_start};
use changeset_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_EDIT_COUNT, FIELD_ERR_CODE,
    FIELD_MOVE_COUNT, FIELD_STEP,
};
use common::chars;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert!(
        !capture.events_for(op_name, EVENT_START).is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ChangesetError::SectionMismatch {
        expected: 0,
        found: 1,
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some("ERR_SECTION_MISMATCH")
    );
}

#[test]
fn test_replay_step_owns_lifecycle_events() {
    let capture = init_test_capture();

    let mut queue = ReplayQueue::new(chars("kitten"));
    queue.enqueue(chars("sitting"));
    queue.enqueue(chars("mitten"));
    queue.drain();

    let starts = capture.events_for("replay_step", EVENT_START);
    let ends = capture.events_for("replay_step", EVENT_END);
    assert_eq!(starts.len(), 2);
    assert_eq!(ends.len(), 2);

    let first = ends
        .iter()
        .find(|e| e.field(FIELD_STEP) == Some("1"))
        .expect("end event for step 1");
    assert_eq!(first.field(FIELD_EDIT_COUNT), Some("3"));
    assert!(first.field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_diff_emits_only_debug_details() {
    let capture = init_test_capture();

    let edits = changeset_core::compute_edits(&chars("abc"), &chars("bca"));
    let _ = changeset_core::translate_flat(&edits, 0);

    let diff_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.target.starts_with("changeset_core::diff"))
        .collect();

    assert!(!diff_events.is_empty());
    assert!(diff_events.iter().all(|e| e.op.is_none()));
    assert!(diff_events
        .iter()
        .any(|e| e.field(FIELD_MOVE_COUNT) == Some("1")));
}
