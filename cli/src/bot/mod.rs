//! # IntentBot Chatbot Engine
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! The part of IntentBot that does actual work, independent of the terminal
//! front end:
//!
//! - `intents`: loads the intents catalog and flattens it into a training corpus
//! - `tfidf`: tokenizer and TF-IDF vectorizer
//! - `classifier`: the multinomial logistic regression model
//! - `responder`: picks a reply for a piece of text
//! - `chat_log`: the CSV chat log
//! - `reactions`: tag → emoji mapping
//! - `session`: the per-session transcript owned by the front end
//!
//! ## Architecture
//!
//! `Chatbot` ties these together. It is built once at startup (load intents,
//! train, open the log) and is immutable afterwards; every interaction goes
//! through `Chatbot::submit`:
//!
//! 1. `responder::respond` classifies the text and picks a response.
//! 2. The reply's tag selects an emoji reaction.
//! 3. The exchange is appended to the chat log. A failure here is returned in
//!    the `Submission` rather than raised, so the reply still reaches the user.
//! 4. The exchange is recorded in the caller's `Conversation`.
//!
pub mod chat_log;
pub mod classifier;
pub mod intents;
pub mod reactions;
pub mod responder;
pub mod session;
pub mod tfidf;

use crate::core::config::{ClassifierSettings, Config};
use crate::core::error::Result;
use chat_log::ChatLog;
use chrono::Local;
use classifier::ClassifierModel;
use intents::Intent;
use rand::Rng;
use reactions::Reactions;
use responder::Reply;
use session::Conversation;
use std::path::Path;
use tracing::{debug, warn, Level};

/// The outcome of one submitted message.
#[derive(Debug)]
pub struct Submission {
    pub reply: Reply,
    pub emoji: String,
    /// Whether the exchange reached the chat log.
    pub saved: Result<()>,
}

/// A trained chatbot bound to its intents catalog and chat log.
#[derive(Debug)]
pub struct Chatbot {
    intents: Vec<Intent>,
    model: ClassifierModel,
    reactions: Reactions,
    log: ChatLog,
}

impl Chatbot {
    /// Loads intents, trains the classifier and opens the chat log named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let intents = intents::load(Path::new(&config.bot.intents_file))?;
        Self::new(
            intents,
            &config.classifier,
            Reactions::with_overrides(&config.reactions),
            ChatLog::new(&config.bot.chat_log),
        )
    }

    /// Trains on `intents`. Fails on a degenerate corpus (see `ClassifierModel::train`).
    pub fn new(
        intents: Vec<Intent>,
        settings: &ClassifierSettings,
        reactions: Reactions,
        log: ChatLog,
    ) -> Result<Self> {
        let model = ClassifierModel::train(&intents::corpus(&intents), settings)?;
        Ok(Self {
            intents,
            model,
            reactions,
            log,
        })
    }

    /// Answers `text`, persists the exchange and records it in `conversation`.
    pub fn submit<R: Rng + ?Sized>(
        &self,
        conversation: &mut Conversation,
        text: &str,
        rng: &mut R,
    ) -> Submission {
        if tracing::enabled!(Level::DEBUG) && !text.trim().is_empty() {
            debug!("Tag probabilities: {:?}", self.model.scores(text));
        }
        let reply = responder::respond(&self.intents, &self.model, text, rng);
        let emoji = self.reactions.for_tag(&reply.tag).to_string();

        let saved = self
            .log
            .append(text, &reply.response, Local::now().naive_local());
        if let Err(e) = &saved {
            warn!("Message not saved: {:#}", e);
        }

        conversation.record_exchange(text, &reply.response, &emoji);
        Submission {
            reply,
            emoji,
            saved,
        }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }

    pub fn reactions(&self) -> &Reactions {
        &self.reactions
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{category, ChatbotError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r#"[
        {"tag": "greeting", "patterns": ["hi", "hello"], "responses": ["Hey!"]},
        {"tag": "goodbye", "patterns": ["bye"], "responses": ["See ya"]}
    ]"#;

    fn bot_with_log(log: ChatLog) -> Chatbot {
        Chatbot::new(
            intents::parse(CATALOG).unwrap(),
            &ClassifierSettings::default(),
            Reactions::default(),
            log,
        )
        .unwrap()
    }

    #[test]
    fn submit_replies_persists_and_records() {
        let dir = tempdir().unwrap();
        let bot = bot_with_log(ChatLog::new(dir.path().join("chat_log.csv")));
        let mut conversation = Conversation::new();
        let mut rng = StdRng::seed_from_u64(1);

        let submission = bot.submit(&mut conversation, "hello", &mut rng);
        assert_eq!(submission.reply.response, "Hey!");
        assert_eq!(submission.reply.tag, "greeting");
        assert_eq!(submission.emoji, "👋");
        assert!(submission.saved.is_ok());

        let turns = bot.log().read_all().unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user_text, "hello");
        assert_eq!(turns[0].response_text, "Hey!");
        assert_eq!(conversation.entries().len(), 2);
    }

    #[test]
    fn blank_submission_gets_prompt_and_thinking_emoji() {
        let dir = tempdir().unwrap();
        let bot = bot_with_log(ChatLog::new(dir.path().join("chat_log.csv")));
        let mut rng = StdRng::seed_from_u64(1);
        let submission = bot.submit(&mut Conversation::new(), "   ", &mut rng);
        assert_eq!(submission.reply.tag, responder::UNKNOWN_TAG);
        assert_eq!(submission.reply.response, responder::EMPTY_INPUT_RESPONSE);
        assert_eq!(submission.emoji, "🤔");
    }

    #[test]
    fn storage_failure_still_returns_reply() {
        let dir = tempdir().unwrap();
        let bot = bot_with_log(ChatLog::new(dir.path()));
        let mut conversation = Conversation::new();
        let mut rng = StdRng::seed_from_u64(1);

        let submission = bot.submit(&mut conversation, "bye", &mut rng);
        assert_eq!(submission.reply.response, "See ya");
        let err = submission.saved.unwrap_err();
        assert!(matches!(category(&err), Some(ChatbotError::Storage(_))));
        assert_eq!(conversation.entries().len(), 2);
    }

    #[test]
    fn from_config_reads_paths() {
        let dir = tempdir().unwrap();
        let intents_path = dir.path().join("intents.json");
        fs::write(&intents_path, CATALOG).unwrap();

        let mut config = Config::default();
        config.bot.intents_file = intents_path.to_string_lossy().into_owned();
        config.bot.chat_log = dir.path().join("log.csv").to_string_lossy().into_owned();
        config.reactions.insert("greeting".into(), "🤝".into());

        let bot = Chatbot::from_config(&config).unwrap();
        assert_eq!(bot.intents().len(), 2);
        assert_eq!(bot.model().classes().len(), 2);
        assert_eq!(bot.reactions().for_tag("greeting"), "🤝");
        assert_eq!(bot.log().path(), dir.path().join("log.csv"));
    }

    #[test]
    fn single_intent_catalog_fails_to_start() {
        let err = Chatbot::new(
            intents::parse(r#"[{"tag": "only", "patterns": ["a b", "c d"]}]"#).unwrap(),
            &ClassifierSettings::default(),
            Reactions::default(),
            ChatLog::new("unused.csv"),
        )
        .unwrap_err();
        assert!(matches!(category(&err), Some(ChatbotError::Training(_))));
    }
}
