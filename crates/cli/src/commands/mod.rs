pub mod ask;
pub mod chat;
pub mod config_cmd;
pub mod demo;
pub mod status;
pub mod suite;

use crate::GlobalOpts;
use dualmind_agent::{Pipeline, preview};
use dualmind_config::AppConfig;
use dualmind_core::{Interaction, ProviderError, Result};

/// Providers that run locally and accept any key.
const KEYLESS_PROVIDERS: &[&str] = &["ollama", "vllm", "llamacpp", "llama.cpp"];

/// Override lookup with command-line flags layered over `env`.
fn flag_lookup<'a>(
    global: &'a GlobalOpts,
    env: impl Fn(&str) -> Option<String> + 'a,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        let flag = match key {
            "DUALMIND_MEMORY_SIZE" => global.memory_size.map(|n| n.to_string()),
            "DUALMIND_MODEL" => global.model.clone(),
            _ => None,
        };
        flag.or_else(|| env(key))
    }
}

/// Load config from the chosen path with environment and flag overrides.
pub fn load_config(global: &GlobalOpts) -> Result<AppConfig> {
    let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_with_lookup(
        &path,
        flag_lookup(global, |key| std::env::var(key).ok()),
    )?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Build the pipeline, failing early with setup instructions when no API
/// key is available for a hosted provider.
pub fn build_pipeline(global: &GlobalOpts) -> Result<(AppConfig, Pipeline)> {
    let config = load_config(global)?;

    if !config.has_api_key() && !KEYLESS_PROVIDERS.contains(&config.provider.as_str()) {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables (or put it in a .env file):");
        eprintln!("    OPENAI_API_KEY=sk-...");
        eprintln!("    DUALMIND_API_KEY=sk-...");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_path().display());
        eprintln!();
        return Err(ProviderError::NotConfigured(format!(
            "no API key for provider '{}'",
            config.provider
        ))
        .into());
    }

    let provider = dualmind_providers::build_from_config(&config);
    let pipeline = Pipeline::new(provider, &config);
    Ok((config, pipeline))
}

/// One numbered entry per stored interaction.
pub fn format_history(history: &[Interaction], max_chars: usize) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{}. You [{}]: {}\n   Assistant: {}",
                i + 1,
                record.intent(),
                record.input(),
                preview(record.response(), max_chars)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualmind_core::Intent;
    use std::io::Write;

    fn opts(memory_size: Option<usize>, model: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            memory_size,
            model: model.map(String::from),
            ..GlobalOpts::default()
        }
    }

    fn env_with(key: &'static str, value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |k: &str| (k == key).then(|| value.to_string())
    }

    #[test]
    fn flags_win_over_environment() {
        let global = opts(Some(2), Some("gpt-4o-mini"));
        let lookup = flag_lookup(&global, env_with("DUALMIND_MEMORY_SIZE", "lots"));
        assert_eq!(lookup("DUALMIND_MEMORY_SIZE").as_deref(), Some("2"));
        assert_eq!(lookup("DUALMIND_MODEL").as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn environment_used_without_flags() {
        let global = opts(None, None);
        let lookup = flag_lookup(&global, env_with("DUALMIND_MODEL", "gpt-4.1"));
        assert_eq!(lookup("DUALMIND_MODEL").as_deref(), Some("gpt-4.1"));
        assert_eq!(lookup("DUALMIND_MEMORY_SIZE"), None);
    }

    #[test]
    fn flag_fixes_invalid_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "memory_size = 0").unwrap();

        let global = opts(Some(5), None);
        let config =
            AppConfig::load_with_lookup(file.path(), flag_lookup(&global, |_: &str| None))
                .unwrap();
        assert_eq!(config.memory_size, 5);
    }

    #[test]
    fn history_lines_are_numbered() {
        let history = vec![
            Interaction::new(
                "Who invented the telephone?",
                "Alexander Graham Bell.",
                Intent::Factual,
            ),
            Interaction::new("Write a haiku", "x".repeat(150), Intent::Creative),
        ];
        let lines = format_history(&history, 100);
        assert!(lines[0].starts_with("1. You [factual]: Who invented the telephone?"));
        assert!(lines[1].starts_with("2. You [creative]: Write a haiku"));
        assert!(lines[1].ends_with("..."));
    }
}
