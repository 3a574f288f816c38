//! The request pipeline: validate → classify → generate → record.

use crate::classifier::IntentClassifier;
use crate::completion::CompletionClient;
use crate::generator::{GenerationPolicy, ResponseGenerator};
use crate::prompts::INVALID_INPUT_RESPONSE;
use chrono::Utc;
use dualmind_config::AppConfig;
use dualmind_core::event::{DomainEvent, EventBus};
use dualmind_core::intent::Intent;
use dualmind_core::interaction::Interaction;
use dualmind_core::provider::Provider;
use dualmind_memory::{AppendOutcome, HistoryStats, HistoryStore};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info};

/// Label reported for input that was rejected before classification.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Outcome of one `process` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessResult {
    pub input: String,
    /// `None` only for rejected input.
    #[serde(serialize_with = "serialize_label")]
    pub intent: Option<Intent>,
    pub response: String,
}

impl ProcessResult {
    fn invalid(input: &str) -> Self {
        Self {
            input: input.to_string(),
            intent: None,
            response: INVALID_INPUT_RESPONSE.to_string(),
        }
    }

    /// `"factual"`, `"creative"` or `"unknown"`.
    pub fn label(&self) -> &'static str {
        self.intent.map_or(UNKNOWN_LABEL, |i| i.as_str())
    }
}

fn serialize_label<S: serde::Serializer>(
    intent: &Option<Intent>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(intent.map_or(UNKNOWN_LABEL, |i| i.as_str()))
}

/// Classifier, both generators and the shared history.
///
/// `process` takes `&self`; share a pipeline across tasks with `Arc`.
pub struct Pipeline {
    classifier: IntentClassifier,
    factual: ResponseGenerator,
    creative: ResponseGenerator,
    history: RwLock<HistoryStore>,
    memory_size: usize,
    events: Arc<EventBus>,
}

impl Pipeline {
    /// Build a pipeline around `provider` using the model, history size,
    /// timeout and sampling knobs from `config`.
    pub fn new(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        let events = Arc::new(EventBus::default());
        let client = CompletionClient::new(
            provider,
            &config.model,
            Duration::from_secs(config.request_timeout_secs),
        );

        let history = HistoryStore::new(config.memory_size);
        let memory_size = history.capacity();

        Self {
            classifier: IntentClassifier::new(client.clone(), config.classifier, events.clone()),
            factual: ResponseGenerator::new(
                client.clone(),
                GenerationPolicy::factual(config.factual),
                events.clone(),
            ),
            creative: ResponseGenerator::new(
                client,
                GenerationPolicy::creative(config.creative),
                events.clone(),
            ),
            history: RwLock::new(history),
            memory_size,
            events,
        }
    }

    /// History capacity; also the number of interactions injected as context.
    pub fn memory_size(&self) -> usize {
        self.memory_size
    }

    /// Subscribe to diagnostic events (fallbacks, failures, appends).
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.events.subscribe()
    }

    fn generator_for(&self, intent: Intent) -> &ResponseGenerator {
        match intent {
            Intent::Factual => &self.factual,
            Intent::Creative => &self.creative,
        }
    }

    /// Route one input through the pipeline. Never fails.
    ///
    /// Empty or whitespace-only input returns the fixed invalid-input result
    /// and leaves history untouched. Everything else is recorded, including
    /// exchanges whose response is a fallback apology.
    pub async fn process(&self, text: &str) -> ProcessResult {
        let input = text.trim();
        if input.is_empty() {
            debug!("Rejecting empty input");
            return ProcessResult::invalid(text);
        }

        info!(input = %preview(input, 50), "Processing input");

        let intent = self.classifier.classify(input).await;
        info!(intent = %intent, "Detected intent");

        // Lock released before the provider call
        let context = self.history.read().await.render_context(self.memory_size);
        let response = self.generator_for(intent).generate(input, &context).await;

        let (outcome, history_len) = {
            let mut history = self.history.write().await;
            let outcome = history.append(Interaction::new(input, response.clone(), intent));
            (outcome, history.len())
        };

        if let AppendOutcome::Stored { evicted } = outcome {
            self.events.publish(DomainEvent::InteractionRecorded {
                intent,
                evicted: evicted.map(|old| old.input().to_string()),
                history_len,
                timestamp: Utc::now(),
            });
        }

        ProcessResult {
            input: input.to_string(),
            intent: Some(intent),
            response,
        }
    }

    /// Copy of the stored interactions, oldest first.
    pub async fn history(&self) -> Vec<Interaction> {
        self.history.read().await.snapshot()
    }

    pub async fn stats(&self) -> HistoryStats {
        self.history.read().await.stats()
    }

    /// Forget every stored interaction. Returns how many were removed.
    pub async fn clear_history(&self) -> usize {
        let removed = self.history.write().await.clear();
        info!(removed, "Memory cleared");
        self.events.publish(DomainEvent::HistoryCleared {
            removed,
            timestamp: Utc::now(),
        });
        removed
    }
}

/// First `max_chars` characters, with an ellipsis when cut.
///
/// Used for log lines and for the shell's history listings.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().nth(max_chars).is_some() {
        out.push_str("...");
    }
    out
}
