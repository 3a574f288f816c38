//! `dualmind demo`: Four prompts, alternating intents.

use super::build_pipeline;
use crate::GlobalOpts;
use dualmind_core::Result;

const DEMO_INPUTS: [&str; 4] = [
    "Who is the CEO of Google?",
    "Give me a caption for a futuristic city",
    "What's the largest planet in our solar system?",
    "Write a short poem about coding",
];

pub async fn run(global: &GlobalOpts) -> Result<()> {
    let (_, pipeline) = build_pipeline(global)?;

    println!();
    println!("=== QUICK DEMO ===");

    for input in DEMO_INPUTS {
        println!();
        println!("User: {input}");
        let result = pipeline.process(input).await;
        println!("Agent [{}]: {}", result.label(), result.response);
    }

    Ok(())
}
