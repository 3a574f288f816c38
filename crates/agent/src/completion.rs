//! Single-attempt text completion over the shared provider.

use dualmind_config::SamplingConfig;
use dualmind_core::error::ProviderError;
use dualmind_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The provider, model and timeout shared by the classifier and generators.
///
/// Cheap to clone: the provider is behind an `Arc`.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    model: String,
    timeout: Duration,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
        }
    }

    /// Send one system + user exchange and return the trimmed text.
    ///
    /// Exactly one attempt. A timeout becomes `ProviderError::Timeout` and
    /// blank output becomes `ProviderError::EmptyResponse`.
    pub async fn complete_text(
        &self,
        system: &str,
        user: &str,
        sampling: SamplingConfig,
    ) -> Result<String, ProviderError> {
        let request = ProviderRequest::single_turn(
            &self.model,
            system,
            user,
            sampling.temperature,
            sampling.max_tokens,
        );

        debug!(
            provider = %self.provider.name(),
            model = %self.model,
            temperature = sampling.temperature,
            max_tokens = sampling.max_tokens,
            "Dispatching completion"
        );

        let call = self.provider.complete(request);
        let response = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ProviderError::Timeout(format!(
                    "provider '{}' did not answer within {}s",
                    self.provider.name(),
                    self.timeout.as_secs()
                )));
            }
        };

        let text = response.message.content.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
