//! # Intent Store
//!
//! File: cli/src/bot/intents.rs
//!
//! Loads the intents catalog: a JSON list of records, each with a unique
//! `tag`, example `patterns` and candidate `responses`.
//!
//! ```json
//! [
//!   {"tag": "greeting", "patterns": ["hi", "hello"], "responses": ["Hey!"]},
//!   {"tag": "goodbye", "patterns": ["bye"], "responses": ["See ya"]}
//! ]
//! ```
//!
//! The catalog is read once at startup and never mutated afterwards.
//!
use crate::common::fs::io;
use crate::core::error::{ChatbotError, Result};
use anyhow::anyhow;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// A named category of user request.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub tag: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

/// Training examples flattened across all intents, in catalog order.
///
/// `texts[i]` is an example phrasing of the intent tagged `tags[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingCorpus {
    pub texts: Vec<String>,
    pub tags: Vec<String>,
}

impl TrainingCorpus {
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Distinct tags, in order of first appearance.
    pub fn distinct_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }
}

/// Loads and validates the intents catalog at `path`.
///
/// # Errors
///
/// - `ChatbotError::Configuration` if the file is missing, is not a JSON list
///   of intent records, has an empty tag, or repeats a tag.
/// - `ChatbotError::Data` if no intent contributes a single pattern.
pub fn load(path: &Path) -> Result<Vec<Intent>> {
    let content = io::read_if_exists(path)
        .map_err(|e| {
            anyhow!(ChatbotError::Configuration(format!(
                "cannot read intents file {}: {:#}",
                path.display(),
                e
            )))
        })?
        .ok_or_else(|| {
            anyhow!(ChatbotError::Configuration(format!(
                "intents file not found: {}",
                path.display()
            )))
        })?;
    let intents = parse(&content)?;
    info!("Loaded {} intents from {}", intents.len(), path.display());
    Ok(intents)
}

/// Parses and validates an intents catalog held in memory.
pub fn parse(json: &str) -> Result<Vec<Intent>> {
    let intents: Vec<Intent> = serde_json::from_str(json).map_err(|e| {
        anyhow!(ChatbotError::Configuration(format!(
            "intents must be a JSON list of {{tag, patterns, responses}} records: {}",
            e
        )))
    })?;

    let mut seen = HashSet::new();
    for intent in &intents {
        if intent.tag.trim().is_empty() {
            anyhow::bail!(ChatbotError::Configuration(
                "intent tag cannot be empty".into()
            ));
        }
        if !seen.insert(intent.tag.as_str()) {
            anyhow::bail!(ChatbotError::Configuration(format!(
                "duplicate intent tag '{}'",
                intent.tag
            )));
        }
        debug!(
            "Intent '{}': {} patterns, {} responses",
            intent.tag,
            intent.patterns.len(),
            intent.responses.len()
        );
    }

    if corpus(&intents).is_empty() {
        anyhow::bail!(ChatbotError::Data(
            "no training data found: every intent has an empty pattern list".into()
        ));
    }
    Ok(intents)
}

/// Flattens `intents` into parallel (text, tag) sequences.
pub fn corpus(intents: &[Intent]) -> TrainingCorpus {
    let mut corpus = TrainingCorpus::default();
    for intent in intents {
        for pattern in &intent.patterns {
            corpus.texts.push(pattern.clone());
            corpus.tags.push(intent.tag.clone());
        }
    }
    corpus
}

/// Finds the intent with the given tag.
pub fn find<'a>(intents: &'a [Intent], tag: &str) -> Option<&'a Intent> {
    intents.iter().find(|intent| intent.tag == tag)
}
