//! # IntentBot History Command
//!
//! File: cli/src/commands/history.rs
//!
//! Replays the chat log, oldest first. Only the paths from configuration are
//! needed, so the classifier is never trained here. An unreadable log is
//! reported as a warning and treated as empty.
//!
use crate::bot::chat_log::{ChatLog, ChatTurn};
use crate::common::ui;
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Show only the most recent N exchanges (N >= 1).
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: Option<usize>,
}

pub fn handle_history(args: HistoryArgs, overrides: &Overrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let log = ChatLog::new(&config.bot.chat_log);
    info!("Reading conversation history from {}", log.path().display());

    let turns = match log.read_all() {
        Ok(turns) => turns,
        Err(e) => {
            warn!("Could not read chat log: {:#}", e);
            eprintln!("⚠️ Could not read chat log: {:#}", e);
            Vec::new()
        }
    };

    println!("{}", render(&turns, args.limit));
    Ok(())
}

fn render(turns: &[ChatTurn], limit: Option<usize>) -> String {
    if turns.is_empty() {
        return "No conversation history found.".to_string();
    }
    let skip = limit.map_or(0, |n| turns.len().saturating_sub(n));
    let mut out = vec!["🗂️ Conversation History".to_string()];
    out.extend(turns[skip..].iter().map(ui::history_entry));
    out.join("\n")
}
