//! Intent classification.
//!
//! One completion call per input with a fixed instruction profile. The raw
//! answer is normalized and checked against the two-label domain; anything
//! else, including a failed call, resolves to [`Intent::FALLBACK`].

use crate::completion::CompletionClient;
use crate::prompts::{CLASSIFIER_SYSTEM_PROMPT, classifier_user_message};
use chrono::Utc;
use dualmind_config::SamplingConfig;
use dualmind_core::event::{DomainEvent, EventBus};
use dualmind_core::intent::Intent;
use std::sync::Arc;
use tracing::{error, warn};

/// Routes input text to a response strategy.
pub struct IntentClassifier {
    client: CompletionClient,
    sampling: SamplingConfig,
    events: Arc<EventBus>,
}

impl IntentClassifier {
    pub fn new(client: CompletionClient, sampling: SamplingConfig, events: Arc<EventBus>) -> Self {
        Self {
            client,
            sampling,
            events,
        }
    }

    /// Classify `text`. Never fails.
    pub async fn classify(&self, text: &str) -> Intent {
        let user = classifier_user_message(text);

        match self
            .client
            .complete_text(CLASSIFIER_SYSTEM_PROMPT, &user, self.sampling)
            .await
        {
            Ok(raw) => match Intent::parse_label(&raw) {
                Some(intent) => intent,
                None => {
                    warn!(
                        raw_label = %raw,
                        "Unexpected intent classification, defaulting to '{}'",
                        Intent::FALLBACK
                    );
                    self.fallback(Some(raw), None)
                }
            },
            Err(e) => {
                error!(error = %e, "Intent detection failed, defaulting to '{}'", Intent::FALLBACK);
                self.fallback(None, Some(e.to_string()))
            }
        }
    }

    fn fallback(&self, raw_label: Option<String>, error_message: Option<String>) -> Intent {
        self.events.publish(DomainEvent::ClassificationFallback {
            raw_label,
            error_message,
            fallback: Intent::FALLBACK,
            timestamp: Utc::now(),
        });
        Intent::FALLBACK
    }
}
