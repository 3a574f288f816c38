//! Domain event system: diagnostics published by the pipeline.
//!
//! Classification and generation faults never surface as errors; they are
//! logged and published here so a caller (or a test) can observe them.

use crate::intent::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// All domain events in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainEvent {
    /// The classifier could not produce a valid label and fell back.
    ClassificationFallback {
        /// Raw provider output, when the call itself succeeded
        raw_label: Option<String>,
        /// Provider error, when the call failed
        error_message: Option<String>,
        fallback: Intent,
        timestamp: DateTime<Utc>,
    },

    /// A generation call failed and the apology text was returned instead.
    GenerationFailed {
        intent: Intent,
        error_message: String,
        timestamp: DateTime<Utc>,
    },

    /// An interaction was appended to history.
    InteractionRecorded {
        intent: Intent,
        /// Input of the record pushed out by this append, if any
        evicted: Option<String>,
        history_len: usize,
        timestamp: DateTime<Utc>,
    },

    /// History was cleared on request.
    HistoryCleared {
        removed: usize,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for domain events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<DomainEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
