//! Snapshots and the bounded snapshot history.
//!
//! The history is persisted as a single JSON array:
//!
//! ```json
//! [{ "playerName": "Ada", "healthPoints": [100, 75, 0], "timestamp": "2026-01-01T00:00:00Z" }]
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved record of per-entity health.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub player_name: String,
    /// One entry per entity, in swarm order.
    pub health_points: Vec<u32>,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(player_name: impl Into<String>, health_points: Vec<u32>, timestamp: DateTime<Utc>) -> Self {
        Self {
            player_name: player_name.into(),
            health_points,
            timestamp,
        }
    }
}

/// FIFO-bounded sequence of snapshots, oldest first.
///
/// ## Example
///
/// ```
/// use chrono::Utc;
/// use swarm_strike::persistence::{Snapshot, SnapshotHistory};
///
/// let mut history = SnapshotHistory::new(2);
/// for hp in [3, 2, 1] {
///     history.push(Snapshot::new("Ada", vec![hp], Utc::now()));
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().health_points, vec![1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotHistory {
    entries: VecDeque<Snapshot>,
    max_len: usize,
}

impl SnapshotHistory {
    /// Create an empty history holding at most `max_len` snapshots.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_len,
        }
    }

    /// Decode a persisted history.
    ///
    /// Entries beyond `max_len` are dropped from the front.
    pub fn decode(json: &str, max_len: usize) -> Result<Self, serde_json::Error> {
        let entries: VecDeque<Snapshot> = serde_json::from_str(json)?;
        let mut history = Self { entries, max_len };
        history.enforce_bound();
        Ok(history)
    }

    /// Encode as a JSON array.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Append a snapshot, evicting the oldest entries past the bound.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        self.enforce_bound();
    }

    fn enforce_bound(&mut self) {
        while self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
