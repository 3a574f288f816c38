//! DualMind CLI: the main entry point.
//!
//! Commands:
//! - `chat` Interactive mode (default)
//! - `ask` Route a single message
//! - `demo` Quick four-prompt demo
//! - `suite` Run the categorized scenario suite
//! - `status` Show effective configuration and provider reachability
//! - `config` Print the default config file

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "dualmind",
    about = "DualMind: routes input to factual or creative answers with rolling memory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.dualmind/config.toml)
    #[arg(long, global = true, env = "DUALMIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the number of interactions kept in memory
    #[arg(long, global = true)]
    pub memory_size: Option<usize>,

    /// Override the model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat interactively (default)
    Chat,

    /// Route a single message and print the answer
    Ask {
        /// The message to send
        #[arg(short, long)]
        message: Option<String>,

        /// Message as positional words
        #[arg(trailing_var_arg = true)]
        words: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the quick demo
    Demo,

    /// Run the categorized scenario suite against the live provider
    Suite {
        /// Pause between calls, in milliseconds
        #[arg(long, default_value_t = 800)]
        delay_ms: u64,
    },

    /// Show effective configuration and check the provider endpoint
    Status,

    /// Print the default configuration file
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so chat output stays readable
    let filter = if cli.global.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let global = cli.global;
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run(&global).await?,
        Commands::Ask {
            message,
            words,
            json,
        } => {
            let text = message.unwrap_or_else(|| words.join(" "));
            commands::ask::run(&global, &text, json).await?
        }
        Commands::Demo => commands::demo::run(&global).await?,
        Commands::Suite { delay_ms } => commands::suite::run(&global, delay_ms).await?,
        Commands::Status => commands::status::run(&global).await?,
        Commands::Config => commands::config_cmd::run(),
    }

    Ok(())
}
