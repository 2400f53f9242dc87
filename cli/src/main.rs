//! # IntentBot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the IntentBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `ask`, etc.) is a variant in the `Commands` enum
//! - Global flags (`--config`, `--intents`, `--log`, `--seed`) are collected into
//!   `core::config::Overrides` and handed to every handler that loads configuration
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! intentbot chat
//!
//! # One question, with a different catalog and debug logging
//! intentbot -vv --intents ./faq.json ask "how old are you"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Intents, classifier, responder and chat log
mod commands; // One module per subcommand
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "intentbot",
    about = "🤖 IntentBot: an intent-classification chatbot",
    long_about = "Answers messages by classifying them into intents with a TF-IDF + \
                  logistic regression model, and keeps a CSV log of every exchange.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of a project `.intentbot.toml`.
    #[arg(long, global = true, env = "INTENTBOT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Intents catalog (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    intents: Option<PathBuf>,
    /// Chat log (CSV).
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,
    /// Seed for response selection, for reproducible replies.
    #[arg(long, global = true, value_name = "N")]
    seed: Option<u64>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat interactively.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single message.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Show the conversation history from the chat log.
    #[command(alias = "h")]
    History(commands::history::HistoryArgs),
    /// List the intents catalog.
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
    /// Describe the chatbot.
    About(commands::about::AboutArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let overrides = crate::core::config::Overrides {
        config_file: cli.config,
        intents_file: cli.intents,
        chat_log: cli.log,
        response_seed: cli.seed,
    };

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &overrides),
        Commands::Ask(args) => commands::ask::handle_ask(args, &overrides),
        Commands::History(args) => commands::history::handle_history(args, &overrides),
        Commands::Intents(args) => commands::intents::handle_intents(args, &overrides),
        Commands::About(args) => commands::about::handle_about(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
