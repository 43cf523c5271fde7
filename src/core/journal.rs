//! Transition journal.
//!
//! Every transition a machine applies is recorded as an immutable value.
//! The journal is an in-memory observation surface for diagnostics and
//! tests; it is serializable so a snapshot can be rendered or shipped to
//! an inspector, but the engine itself never persists it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// Records carry names rather than ids so they stay meaningful outside
/// the blueprint that produced them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State the machine left
    pub from: String,
    /// Event that triggered the transition
    pub event: String,
    /// State the machine entered
    pub to: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of applied transitions.
///
/// `record` is pure — it returns a new journal with the record appended,
/// leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use machinist::core::{TransitionJournal, TransitionRecord};
/// use chrono::Utc;
///
/// let journal = TransitionJournal::new();
/// let journal = journal.record(TransitionRecord {
///     from: "idle".into(),
///     event: "start".into(),
///     to: "running".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.len(), 1);
/// assert_eq!(journal.path(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionJournal {
    records: Vec<TransitionRecord>,
}

impl TransitionJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new journal.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in application order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of applied transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The path of state names traversed: the first record's source,
    /// then the target of every record.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Wall-clock span from the first to the last record.
    ///
    /// Returns `None` while the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let span = last.timestamp.signed_duration_since(first.timestamp);
            span.to_std().ok()
        } else {
            None
        }
    }
}
