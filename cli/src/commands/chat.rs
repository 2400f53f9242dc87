//! # IntentBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! The interactive front end. Each line read from stdin is submitted to the
//! chatbot, answered, logged, and added to this session's transcript before
//! the next line is read.
//!
//! ## Session Commands
//!
//! | Input          | Effect                                      |
//! |----------------|---------------------------------------------|
//! | `/hello`       | quick reply, submits "Hello"                |
//! | `/help`        | quick reply, submits "I need help"          |
//! | `/goodbye`     | quick reply, submits "Goodbye"              |
//! | `/transcript`  | prints this session's conversation          |
//! | `/quit`, `/exit` | ends the session (so does end of input)   |
//!
//! A completely empty line is ignored. Whitespace-only lines are submitted
//! and answered with the input prompt.
//!
use crate::bot::reactions::USER_REACTION;
use crate::bot::session::Conversation;
use crate::bot::Chatbot;
use crate::commands::response_rng;
use crate::common::ui;
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {}

/// Quick replies: command, message submitted.
const QUICK_REPLIES: &[(&str, &str)] = &[
    ("/hello", "Hello"),
    ("/help", "I need help"),
    ("/goodbye", "Goodbye"),
];

pub fn handle_chat(_args: ChatArgs, overrides: &Overrides) -> Result<()> {
    let config = config::load_config(overrides)?;
    let bot = Chatbot::from_config(&config)?;
    let mut rng = response_rng(&config);
    info!("Starting chat session, logging to {}", bot.log().path().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&bot, stdin.lock(), stdout.lock(), &mut rng)
}

/// Runs the read-respond loop until `/quit` or end of input.
fn run_session<I, O, R>(bot: &Chatbot, mut input: I, mut output: O, rng: &mut R) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut conversation = Conversation::new();

    writeln!(output, "Welcome! Type your message below and chat with the AI 🤖")?;
    writeln!(
        output,
        "⚡ Quick replies: /hello, /help, /goodbye · /transcript shows this chat · /quit exits"
    )?;

    let mut buf = Vec::new();
    loop {
        write!(output, "You: ")?;
        output.flush().context("Failed to flush stdout")?;

        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?
            == 0
        {
            writeln!(output)?;
            break;
        }
        let line = decode_line(&buf);

        let command = line.trim();
        if line.is_empty() {
            continue;
        }
        if command == "/quit" || command == "/exit" {
            break;
        }
        if command == "/transcript" {
            if conversation.is_empty() {
                writeln!(output, "(no messages yet)")?;
            } else {
                writeln!(output, "🗨️ Chat History")?;
                writeln!(output, "{}", ui::transcript(&conversation))?;
            }
            continue;
        }

        let text = match QUICK_REPLIES.iter().find(|(cmd, _)| *cmd == command) {
            Some((cmd, message)) => {
                debug!("Quick reply {} -> {:?}", cmd, message);
                writeln!(output, "{}", ui::user_line(USER_REACTION, message))?;
                message.to_string()
            }
            None => line,
        };

        let submission = bot.submit(&mut conversation, &text, rng);
        writeln!(
            output,
            "{}",
            ui::bot_line(&submission.emoji, &submission.reply.response)
        )?;
        if let Err(e) = &submission.saved {
            writeln!(output, "⚠️ (message not saved: {:#})", e)?;
        }
    }

    writeln!(output, "👋 Bye! {} messages this session.", conversation.entries().len() / 2)?;
    Ok(())
}

/// Strips the line terminator. Invalid UTF-8 is replaced rather than rejected.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
