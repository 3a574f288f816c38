//! Context-conditioned response generation.
//!
//! Two policies share one generator type. A policy fixes the instruction
//! profile, the wording of the user message, the sampling knobs and the
//! apology returned when the provider call fails.

use crate::completion::CompletionClient;
use crate::prompts;
use chrono::Utc;
use dualmind_config::SamplingConfig;
use dualmind_core::event::{DomainEvent, EventBus};
use dualmind_core::intent::Intent;
use std::sync::Arc;
use tracing::error;

/// Everything that differs between the factual and creative variants.
#[derive(Debug, Clone)]
pub struct GenerationPolicy {
    intent: Intent,
    system_prompt: &'static str,
    request_label: &'static str,
    directive: &'static str,
    apology: &'static str,
    sampling: SamplingConfig,
}

impl GenerationPolicy {
    /// Short, precise answers.
    pub fn factual(sampling: SamplingConfig) -> Self {
        Self {
            intent: Intent::Factual,
            system_prompt: prompts::FACTUAL_SYSTEM_PROMPT,
            request_label: "Current question",
            directive: "Please provide a direct, factual answer.",
            apology: prompts::FACTUAL_APOLOGY,
            sampling,
        }
    }

    /// Longer, more varied output.
    pub fn creative(sampling: SamplingConfig) -> Self {
        Self {
            intent: Intent::Creative,
            system_prompt: prompts::CREATIVE_SYSTEM_PROMPT,
            request_label: "Current creative request",
            directive: "Please generate creative content based on this request.",
            apology: prompts::CREATIVE_APOLOGY,
            sampling,
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn sampling(&self) -> SamplingConfig {
        self.sampling
    }

    pub fn apology(&self) -> &'static str {
        self.apology
    }

    pub fn system_prompt(&self) -> &'static str {
        self.system_prompt
    }

    fn user_message(&self, text: &str, context: &str) -> String {
        prompts::generation_user_message(context, self.request_label, text, self.directive)
    }
}

/// Produces a response for one policy.
pub struct ResponseGenerator {
    client: CompletionClient,
    policy: GenerationPolicy,
    events: Arc<EventBus>,
}

impl ResponseGenerator {
    pub fn new(client: CompletionClient, policy: GenerationPolicy, events: Arc<EventBus>) -> Self {
        Self {
            client,
            policy,
            events,
        }
    }

    /// Generate a response to `text` given a rendered history block.
    /// Never fails: a provider fault yields the policy's apology.
    pub async fn generate(&self, text: &str, context: &str) -> String {
        let user = self.policy.user_message(text, context);

        match self
            .client
            .complete_text(self.policy.system_prompt, &user, self.policy.sampling)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(
                    intent = %self.policy.intent,
                    error = %e,
                    "Error generating {} response",
                    self.policy.intent
                );
                self.events.publish(DomainEvent::GenerationFailed {
                    intent: self.policy.intent,
                    error_message: e.to_string(),
                    timestamp: Utc::now(),
                });
                self.policy.apology.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ScriptedProvider;
    use dualmind_core::error::ProviderError;
    use std::time::Duration;

    fn generator(
        provider: Arc<ScriptedProvider>,
        policy: GenerationPolicy,
    ) -> (ResponseGenerator, Arc<EventBus>) {
        let events = Arc::new(EventBus::default());
        let client = CompletionClient::new(provider, "mock-model", Duration::from_secs(5));
        (ResponseGenerator::new(client, policy, events.clone()), events)
    }

    #[tokio::test]
    async fn factual_request_layout() {
        let provider = Arc::new(ScriptedProvider::texts(&["Paris is the capital of France."]));
        let policy = GenerationPolicy::factual(SamplingConfig::factual());
        let (generator, _) = generator(provider.clone(), policy);

        let response = generator
            .generate("What is the capital of France?", "No previous conversation.")
            .await;
        assert_eq!(response, "Paris is the capital of France.");

        let requests = provider.requests();
        let req = &requests[0];
        assert_eq!(req.messages[0].content, prompts::FACTUAL_SYSTEM_PROMPT);
        let user = &req.messages[1].content;
        assert!(user.starts_with("Context from previous conversation:\nNo previous conversation."));
        assert!(user.contains("Current question: What is the capital of France?"));
        assert!(user.ends_with("Please provide a direct, factual answer."));
        assert!((req.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn creative_request_carries_context_and_knobs() {
        let provider = Arc::new(ScriptedProvider::texts(&["Neon spires hum at dusk."]));
        let sampling = SamplingConfig {
            temperature: 1.2,
            max_tokens: 400,
        };
        let (generator, _) = generator(provider.clone(), GenerationPolicy::creative(sampling));

        let context = "User: Who is the CEO of Google?\nAssistant: Sundar Pichai.";
        generator
            .generate("Give me a caption for a futuristic city", context)
            .await;

        let requests = provider.requests();
        let req = &requests[0];
        assert_eq!(req.messages[0].content, prompts::CREATIVE_SYSTEM_PROMPT);
        let user = &req.messages[1].content;
        assert!(user.contains(context));
        assert!(user.contains("Current creative request: Give me a caption for a futuristic city"));
        assert!(user.ends_with("Please generate creative content based on this request."));
        assert_eq!(req.max_tokens, Some(400));
        assert!((req.temperature - 1.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn failure_returns_variant_apology() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Err(ProviderError::Network("connection reset".into())),
        ]));
        let policy = GenerationPolicy::creative(SamplingConfig::creative());
        let (generator, events) = generator(provider, policy);
        let mut rx = events.subscribe();

        let response = generator.generate("Write a short poem about rain", "ctx").await;
        assert_eq!(response, prompts::CREATIVE_APOLOGY);

        let event = rx.recv().await.unwrap();
        match event.as_ref() {
            DomainEvent::GenerationFailed { intent, error_message, .. } => {
                assert_eq!(*intent, Intent::Creative);
                assert!(error_message.contains("connection reset"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_output_returns_apology() {
        let provider = Arc::new(ScriptedProvider::texts(&["  "]));
        let policy = GenerationPolicy::factual(SamplingConfig::factual());
        let (generator, _) = generator(provider, policy);
        let response = generator.generate("Define photosynthesis", "ctx").await;
        assert_eq!(response, prompts::FACTUAL_APOLOGY);
    }

    #[test]
    fn policies_are_distinct() {
        let factual = GenerationPolicy::factual(SamplingConfig::factual());
        let creative = GenerationPolicy::creative(SamplingConfig::creative());
        assert_eq!(factual.intent(), Intent::Factual);
        assert_eq!(creative.intent(), Intent::Creative);
        assert_ne!(factual.system_prompt(), creative.system_prompt());
        assert_ne!(factual.apology(), creative.apology());
        assert!(factual.sampling().temperature < creative.sampling().temperature);
    }
}
