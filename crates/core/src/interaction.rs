//! Interaction records: one completed input/response exchange.

use crate::intent::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single routed exchange kept in conversation history.
///
/// Fields are private so a stored record cannot be edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    id: String,
    input: String,
    response: String,
    intent: Intent,
    created_at: DateTime<Utc>,
}

impl Interaction {
    /// Create a record. The input is trimmed; the response is kept as given.
    pub fn new(input: impl Into<String>, response: impl Into<String>, intent: Intent) -> Self {
        let input: String = input.into();
        Self {
            id: Uuid::new_v4().to_string(),
            input: input.trim().to_string(),
            response: response.into(),
            intent,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this record carries a usable input.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}
