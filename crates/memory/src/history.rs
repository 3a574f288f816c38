//! Conversation history: the last N interactions, oldest evicted first.
//!
//! The store supplies the context block injected into generation prompts and
//! answers the read-only inspection queries (snapshot, stats).

use crate::ring_buffer::RingBuffer;
use dualmind_core::{Intent, Interaction};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rendered in place of the context block when there is no history.
pub const NO_CONTEXT: &str = "No previous conversation.";

/// Default number of interactions kept.
pub const DEFAULT_CAPACITY: usize = 3;

/// Counts over the records currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: usize,
    pub factual_count: usize,
    pub creative_count: usize,
    pub capacity: usize,
}

/// Result of [`HistoryStore::append`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    /// The record had no usable input and was not stored.
    Rejected,
    /// Stored; carries the record pushed out to make room, if any.
    Stored { evicted: Option<Interaction> },
}

/// Fixed-capacity interaction history.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    records: RingBuffer<Interaction>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: RingBuffer::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record at the tail, evicting the oldest if the store is full.
    /// Records with an empty input are ignored.
    pub fn append(&mut self, record: Interaction) -> AppendOutcome {
        if record.is_empty() {
            debug!("Ignoring interaction with empty input");
            return AppendOutcome::Rejected;
        }

        let evicted = self.records.push(record);
        if let Some(old) = &evicted {
            debug!(evicted_id = %old.id(), "History full, evicted oldest interaction");
        }
        AppendOutcome::Stored { evicted }
    }

    /// Render the newest `max_records` interactions as alternating
    /// `User:` / `Assistant:` lines, oldest first.
    ///
    /// Produces exactly `2 * min(max_records, len)` lines; newlines inside a
    /// record are folded into spaces, and a zero window renders as an empty
    /// string. An empty store renders as [`NO_CONTEXT`].
    pub fn render_context(&self, max_records: usize) -> String {
        if self.records.is_empty() {
            return NO_CONTEXT.to_string();
        }

        let mut lines = Vec::with_capacity(2 * max_records.min(self.len()));
        for record in self.records.last(max_records) {
            lines.push(format!("User: {}", single_line(record.input())));
            lines.push(format!("Assistant: {}", single_line(record.response())));
        }
        lines.join("\n")
    }

    /// Owned copy of every record, oldest first.
    pub fn snapshot(&self) -> Vec<Interaction> {
        self.records.iter().cloned().collect()
    }

    pub fn stats(&self) -> HistoryStats {
        let (factual_count, creative_count) =
            self.records
                .iter()
                .fold((0, 0), |(f, c), record| match record.intent() {
                    Intent::Factual => (f + 1, c),
                    Intent::Creative => (f, c + 1),
                });

        HistoryStats {
            total: self.records.len(),
            factual_count,
            creative_count,
            capacity: self.capacity(),
        }
    }

    /// Remove every record. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        self.records.clear()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
