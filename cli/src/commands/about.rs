//! # IntentBot About Command
//!
//! File: cli/src/commands/about.rs
//!
//! Prints a short description of the chatbot. Needs no configuration.
//!
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct AboutArgs {}

const ABOUT_TEXT: &str = "\
ℹ️ About This Chatbot
- 🤖 Intent-classification chatbot using Natural Language Processing.
- 💡 Trained with TF-IDF features and multinomial logistic regression.
- 🌟 Reacts to every reply with an emoji chosen by intent.
- 📝 Logs conversations to a CSV file for later review (`intentbot history`).
- ⚡ Quick replies in `intentbot chat`: /hello, /help, /goodbye.";

pub fn handle_about(_args: AboutArgs) -> Result<()> {
    println!("{}", ABOUT_TEXT);
    Ok(())
}
