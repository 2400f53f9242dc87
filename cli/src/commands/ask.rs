//! # IntentBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! Answers one message and exits. The exchange is logged exactly as in
//! `chat`; if logging fails the reply is still printed and a warning goes to
//! stderr.
//!
//! ```bash
//! intentbot ask hello there
//! intentbot --seed 3 ask "what can you do?"
//! ```
//!
use crate::bot::reactions::USER_REACTION;
use crate::bot::session::Conversation;
use crate::bot::Chatbot;
use crate::commands::response_rng;
use crate::common::ui;
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message. Multiple words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

pub fn handle_ask(args: AskArgs, overrides: &Overrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let bot = Chatbot::from_config(&config)?;
    let mut rng = response_rng(&config);

    let text = args.text.join(" ");
    info!("Answering one-shot message {:?}", text);
    let submission = bot.submit(&mut Conversation::new(), &text, &mut rng);

    println!("{}", ui::user_line(USER_REACTION, &text));
    println!("{}", ui::bot_line(&submission.emoji, &submission.reply.response));
    if let Err(e) = &submission.saved {
        eprintln!("⚠️ Message not saved: {:#}", e);
    }
    Ok(())
}
