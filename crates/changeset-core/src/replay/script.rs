//! JSON replay scripts.
//!
//! ```json
//! {"initial": "changeset", "snapshots": ["64927513", "917546832"]}
//! {"initial": ["123", "ab"], "snapshots": [["123", "abc"], []]}
//! ```
//!
//! Strings are split into characters: a flat script yields a
//! `ReplayQueue<char>`, a hierarchical one a `ReplayQueue<Vec<char>>`.

use super::fixtures::{chars, sections};
use super::ReplayQueue;
use crate::errors::{ChangesetError, Result};
use serde::{Deserialize, Serialize};

/// Starting snapshot and the snapshots to replay after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript<S> {
    pub initial: S,
    pub snapshots: Vec<S>,
}

impl<S> ReplayScript<S> {
    fn non_empty(self) -> Result<Self> {
        if self.snapshots.is_empty() {
            return Err(ChangesetError::InvalidReplayData {
                reason: "no snapshots to replay".to_string(),
            });
        }
        Ok(self)
    }
}

/// Parse a flat replay script.
///
/// # Errors
/// * `Serialization` - the input is not a script of strings
/// * `InvalidReplayData` - the script has no snapshots
pub fn flat_queue_from_json(json: &str) -> Result<ReplayQueue<char>> {
    let script: ReplayScript<String> = serde_json::from_str(json)?;
    let script = script.non_empty()?;

    let mut queue = ReplayQueue::new(chars(&script.initial));
    queue.extend(script.snapshots.iter().map(|s| chars(s)));
    Ok(queue)
}

/// Parse a hierarchical replay script.
///
/// # Errors
/// * `Serialization` - the input is not a script of string lists
/// * `InvalidReplayData` - the script has no snapshots
pub fn hierarchical_queue_from_json(json: &str) -> Result<ReplayQueue<Vec<char>>> {
    let script: ReplayScript<Vec<String>> = serde_json::from_str(json)?;
    let script = script.non_empty()?;

    let to_sections = |items: &Vec<String>| {
        let borrowed: Vec<&str> = items.iter().map(String::as_str).collect();
        sections(&borrowed)
    };

    let mut queue = ReplayQueue::new(to_sections(&script.initial));
    queue.extend(script.snapshots.iter().map(to_sections));
    Ok(queue)
}
