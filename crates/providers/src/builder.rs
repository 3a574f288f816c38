//! Provider construction from configuration.
//!
//! The pipeline talks to exactly one provider, built once at startup and
//! shared by the classifier and both generator variants.

use crate::openai_compat::OpenAiCompatProvider;
use dualmind_config::AppConfig;
use dualmind_core::provider::Provider;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured provider.
///
/// API key resolution: `[providers.<name>].api_key`, then the top-level
/// `api_key`. Base URL: `[providers.<name>].api_url`, then the well-known
/// default for that name.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn Provider> {
    let name = config.provider.as_str();
    let provider_config = config.providers.get(name);

    let api_key = provider_config
        .and_then(|p| p.api_key.clone())
        .or_else(|| config.api_key.clone())
        .unwrap_or_default();

    let base_url = provider_config
        .and_then(|p| p.api_url.clone())
        .unwrap_or_else(|| default_base_url(name));

    tracing::debug!(provider = %name, base_url = %base_url, "Building provider");

    Arc::new(
        OpenAiCompatProvider::new(name, base_url, api_key)
            .with_timeout(Duration::from_secs(config.request_timeout_secs)),
    )
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualmind_config::ProviderConfig;

    #[test]
    fn default_base_urls() {
        assert!(default_base_url("openai").contains("api.openai.com"));
        assert!(default_base_url("openrouter").contains("openrouter.ai"));
        assert!(default_base_url("ollama").contains("localhost:11434"));
    }

    #[test]
    fn build_from_default_config() {
        let config = AppConfig::default();
        let provider = build_from_config(&config);
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn build_uses_provider_section() {
        let mut config = AppConfig {
            provider: "local".into(),
            ..AppConfig::default()
        };
        config.providers.insert(
            "local".into(),
            ProviderConfig {
                api_key: None,
                api_url: Some("http://127.0.0.1:9000/v1".into()),
            },
        );
        let provider = build_from_config(&config);
        assert_eq!(provider.name(), "local");
    }
}
