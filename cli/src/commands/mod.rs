//! # IntentBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level subcommands of the `intentbot` CLI. Each module defines its
//! own clap arguments struct and a `handle_*` function that `main.rs` routes
//! to. Handlers load configuration themselves, so commands that do not need
//! the classifier (`history`, `about`) never train one.
//!
//! ## Commands
//!
//! - `chat`: interactive session with quick replies and a session transcript
//! - `ask`: answer a single message and exit
//! - `history`: replay the chat log
//! - `intents`: list the intents catalog, optionally training to check it
//! - `about`: describe the bot
//!

/// `intentbot about`: prints what the bot is and how it works.
pub mod about;
/// `intentbot ask <text>`: one-shot question.
pub mod ask;
/// `intentbot chat`: the interactive loop.
pub mod chat;
/// `intentbot history`: conversation history from the chat log.
pub mod history;
/// `intentbot intents`: catalog overview.
pub mod intents;

use crate::core::config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// RNG for response selection: seeded when configured, OS entropy otherwise.
pub(crate) fn response_rng(config: &Config) -> StdRng {
    match config.bot.response_seed {
        Some(seed) => {
            debug!("Seeding response selection with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}
