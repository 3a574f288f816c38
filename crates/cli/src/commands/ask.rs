//! `dualmind ask`: Route a single message.

use super::build_pipeline;
use crate::GlobalOpts;
use dualmind_core::Result;

pub async fn run(global: &GlobalOpts, text: &str, json: bool) -> Result<()> {
    let (_, pipeline) = build_pipeline(global)?;

    if !json {
        eprint!("  Thinking...");
    }
    let result = pipeline.process(text).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        eprint!("\r              \r");
        println!("Agent [{}]: {}", result.label(), result.response);
    }

    Ok(())
}
