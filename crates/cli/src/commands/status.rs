//! `dualmind status`: Show effective configuration and provider reachability.

use super::load_config;
use crate::GlobalOpts;
use dualmind_config::{AppConfig, SamplingConfig};
use dualmind_core::Result;
use dualmind_core::provider::Provider;
use std::time::Duration;

fn sampling_line(sampling: &SamplingConfig) -> String {
    format!("temperature {}, max {} tokens", sampling.temperature, sampling.max_tokens)
}

/// One-line verdict from the provider's health check.
async fn reachability(provider: &dyn Provider, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, provider.health_check()).await {
        Ok(Ok(true)) => "reachable".into(),
        Ok(Ok(false)) => "responded with an error (check key and URL)".into(),
        Ok(Err(e)) => format!("unreachable ({e})"),
        Err(_) => format!("unreachable (no answer within {}s)", timeout.as_secs()),
    }
}

pub async fn run(global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let config_path = global.config.clone().unwrap_or_else(AppConfig::config_path);

    println!("DualMind Status");
    println!("===============");
    println!("  Config file:  {}", config_path.display());
    println!("  Provider:     {}", config.provider);
    println!("  Model:        {}", config.model);
    println!(
        "  API key:      {}",
        if config.has_api_key() { "configured" } else { "missing" }
    );
    println!("  Memory size:  {}", config.memory_size);
    println!("  Timeout:      {}s", config.request_timeout_secs);
    println!("  Classifier:   {}", sampling_line(&config.classifier));
    println!("  Factual:      {}", sampling_line(&config.factual));
    println!("  Creative:     {}", sampling_line(&config.creative));

    let provider = dualmind_providers::build_from_config(&config);
    let timeout = Duration::from_secs(config.request_timeout_secs);
    println!("  Endpoint:     {}", reachability(provider.as_ref(), timeout).await);

    if config_path.exists() {
        println!("\n  Config file found");
    } else {
        println!("\n  No config file, using defaults (see `dualmind config`)");
    }

    Ok(())
}
