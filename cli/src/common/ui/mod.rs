//! # IntentBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Plain-text rendering for the terminal front end. Functions here only build
//! strings; printing is left to the commands so output stays easy to test.
//!
//! - `bot_line` / `user_line`: one chat bubble each, prefixed with its emoji.
//! - `transcript`: the current session's conversation.
//! - `history_entry`: one chat log turn in the history view.
//!
use crate::bot::chat_log::ChatTurn;
use crate::bot::session::{Conversation, Speaker};

/// Separator printed after each history entry.
pub const HISTORY_SEPARATOR: &str = "---";

pub fn bot_line(emoji: &str, response: &str) -> String {
    format!("🤖 Bot {}: {}", emoji, response)
}

pub fn user_line(emoji: &str, text: &str) -> String {
    format!("{} You: {}", emoji, text)
}

/// Renders every entry of `conversation`, one per line.
pub fn transcript(conversation: &Conversation) -> String {
    conversation
        .entries()
        .iter()
        .map(|entry| match entry.speaker {
            Speaker::User => user_line(&entry.emoji, &entry.message),
            Speaker::Bot => bot_line(&entry.emoji, &entry.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn history_entry(turn: &ChatTurn) -> String {
    format!(
        "🧑‍💻 User: {}\n🤖 Chatbot: {}\n🕒 Timestamp: {}\n{}",
        turn.user_text, turn.response_text, turn.timestamp, HISTORY_SEPARATOR
    )
}
