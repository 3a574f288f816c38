//! `dualmind chat`: Interactive mode.

use super::{build_pipeline, format_history};
use crate::GlobalOpts;
use dualmind_agent::Pipeline;
use dualmind_core::Result;
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Exit,
    Memory,
    Stats,
    Clear,
    Help,
    Skip,
    Message(&'a str),
}

fn parse_line(line: &str) -> ChatCommand<'_> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => ChatCommand::Skip,
        "exit" | "quit" | "/exit" | "/quit" | ":q" => ChatCommand::Exit,
        "memory" => ChatCommand::Memory,
        "stats" => ChatCommand::Stats,
        "clear" => ChatCommand::Clear,
        "help" => ChatCommand::Help,
        _ => ChatCommand::Message(trimmed),
    }
}

fn print_help() {
    println!();
    println!("  Commands:");
    println!("    exit    Quit the program");
    println!("    memory  Show conversation history");
    println!("    stats   Show memory statistics");
    println!("    clear   Clear conversation memory");
    println!("    help    Show this help message");
    println!();
}

async fn print_memory(pipeline: &Pipeline) {
    let history = pipeline.history().await;
    println!();
    println!("  --- Conversation History ({} interactions) ---", history.len());
    if history.is_empty() {
        println!("  No interactions yet.");
    }
    for entry in format_history(&history, 100) {
        for line in entry.lines() {
            println!("  {line}");
        }
    }
    println!();
}

async fn print_stats(pipeline: &Pipeline) {
    let stats = pipeline.stats().await;
    println!();
    println!("  --- Memory Statistics ---");
    println!("  Total interactions: {}", stats.total);
    println!("  Factual queries:    {}", stats.factual_count);
    println!("  Creative prompts:   {}", stats.creative_count);
    println!("  Memory capacity:    {}", stats.capacity);
    println!();
}

pub async fn run(global: &GlobalOpts) -> Result<()> {
    let (config, pipeline) = build_pipeline(global)?;

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║         DualMind: Interactive Mode           ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Provider:  {}", config.provider);
    println!("  Model:     {}", config.model);
    println!("  Memory:    last {} interactions", pipeline.memory_size());
    print_help();
    println!("  Start chatting!");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF (Ctrl+D)
            Err(e) => {
                eprintln!("  [Input Error] {e}");
                break;
            }
        };

        match parse_line(&line) {
            ChatCommand::Skip => continue,
            ChatCommand::Exit => break,
            ChatCommand::Memory => print_memory(&pipeline).await,
            ChatCommand::Stats => print_stats(&pipeline).await,
            ChatCommand::Clear => {
                pipeline.clear_history().await;
                println!("  Conversation memory cleared.");
                println!();
            }
            ChatCommand::Help => print_help(),
            ChatCommand::Message(text) => {
                eprint!("  ...");
                let result = pipeline.process(text).await;
                eprint!("\r     \r");
                println!();
                println!("  Agent [{}]: {}", result.label(), result.response);
                println!();
            }
        }
    }

    println!();
    println!("  Goodbye!");
    println!();
    Ok(())
}
