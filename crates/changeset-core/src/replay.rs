//! Replaying a series of snapshots.
//!
//! A [`ReplayQueue`] holds the current snapshot and the snapshots still to
//! come. Each [`step`](ReplayQueue::step) diffs the current snapshot
//! against the next one, translates the edits into a batch and makes the
//! next snapshot current. This is how the CLI `replay` command and the
//! fixture-driven tests exercise the engine across many transitions.
//!
//! Every step is a logged operation (`op = "replay_step"`).

pub mod fixtures;
pub mod script;

use crate::batch::{translate_flat, translate_hierarchical};
use crate::batch::{BatchDescriptor, HierarchicalBatchDescriptor};
use crate::diff::compute_edits;
use crate::diff::model::{Edit, EditScript};
use crate::{log_op_end, log_op_start};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Instant;

pub use script::{flat_queue_from_json, hierarchical_queue_from_json, ReplayScript};

/// Outcome of one replay step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep<T, B> {
    /// 1-based position of this step in the replay
    pub step: usize,
    pub edits: EditScript<T>,
    pub batch: B,
    /// True when no snapshots remain after this step
    pub is_complete: bool,
}

/// Step over flat sequences, batch scoped to section 0.
pub type FlatStep<T> = ReplayStep<T, BatchDescriptor>;

/// Step over sections of rows.
pub type HierarchicalStep<U> = ReplayStep<Vec<U>, HierarchicalBatchDescriptor>;

/// Current snapshot plus the pending snapshots to diff against in order.
#[derive(Debug, Clone)]
pub struct ReplayQueue<T> {
    current: Vec<T>,
    pending: VecDeque<Vec<T>>,
    completed: usize,
}

impl<T> ReplayQueue<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            current: initial,
            pending: VecDeque::new(),
            completed: 0,
        }
    }

    /// Queue another snapshot behind the pending ones.
    pub fn enqueue(&mut self, next: Vec<T>) {
        self.pending.push_back(next);
    }

    pub fn current(&self) -> &[T] {
        &self.current
    }

    /// Number of snapshots not yet stepped to.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of steps taken so far.
    pub fn completed_steps(&self) -> usize {
        self.completed
    }
}

impl<T> Extend<Vec<T>> for ReplayQueue<T> {
    fn extend<I: IntoIterator<Item = Vec<T>>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

impl<T: PartialEq + Clone> ReplayQueue<T> {
    /// Advance one snapshot, producing a flat batch.
    ///
    /// Returns `None` once the queue is exhausted.
    pub fn step(&mut self) -> Option<FlatStep<T>> {
        self.advance(|edits| translate_flat(edits, 0))
    }

    /// Step until no snapshots remain.
    pub fn drain(&mut self) -> Vec<FlatStep<T>> {
        std::iter::from_fn(|| self.step()).collect()
    }

    fn advance<B, F>(&mut self, translate: F) -> Option<ReplayStep<T, B>>
    where
        F: FnOnce(&[Edit<T>]) -> B,
    {
        let next = self.pending.pop_front()?;
        let step = self.completed + 1;

        log_op_start!(
            "replay_step",
            step = step,
            origin_len = self.current.len(),
            destination_len = next.len()
        );
        let start = Instant::now();

        let edits = compute_edits(&self.current, &next);
        let batch = translate(&edits);
        let move_count = edits.iter().filter(|edit| edit.is_move()).count();

        self.current = next;
        self.completed = step;
        let is_complete = self.pending.is_empty();

        log_op_end!(
            "replay_step",
            duration_ms = start.elapsed().as_millis() as u64,
            step = step,
            edit_count = edits.len(),
            move_count = move_count
        );

        Some(ReplayStep {
            step,
            edits,
            batch,
            is_complete,
        })
    }
}

impl<U: PartialEq + Clone> ReplayQueue<Vec<U>> {
    /// Advance one snapshot, reconciling sections and rows.
    pub fn step_hierarchical(&mut self) -> Option<HierarchicalStep<U>> {
        self.advance(|edits| translate_hierarchical(edits))
    }

    pub fn drain_hierarchical(&mut self) -> Vec<HierarchicalStep<U>> {
        std::iter::from_fn(|| self.step_hierarchical()).collect()
    }
}
