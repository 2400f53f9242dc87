//! # Conversation Session
//!
//! File: cli/src/bot/session.rs
//!
//! The in-memory transcript of one interactive session. It belongs to the
//! front end (`commands::chat`), which passes it into `Chatbot::submit` on
//! every exchange; the chatbot itself keeps no per-session state. Unlike the
//! chat log, nothing here outlives the process.
//!
use crate::bot::reactions::USER_REACTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub speaker: Speaker,
    pub message: String,
    pub emoji: String,
}

#[derive(Debug, Default)]
pub struct Conversation {
    entries: Vec<Entry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the user's line followed by the bot's reply.
    pub fn record_exchange(&mut self, user_text: &str, response: &str, bot_emoji: &str) {
        self.entries.push(Entry {
            speaker: Speaker::User,
            message: user_text.to_string(),
            emoji: USER_REACTION.to_string(),
        });
        self.entries.push(Entry {
            speaker: Speaker::Bot,
            message: response.to_string(),
            emoji: bot_emoji.to_string(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
