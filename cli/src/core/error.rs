//! # IntentBot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout IntentBot. Every
//! failure the chatbot core can report falls into one of a few categories,
//! each with a different recovery story:
//!
//! - `Configuration`: the intents file or a settings file is missing or
//!   structurally invalid. Fatal at startup.
//! - `Data`: the intents file parsed, but yields no training examples. Fatal
//!   at startup.
//! - `Training`: the corpus is degenerate (fewer than two distinct tags), so a
//!   classifier fit would be meaningless. Fatal at startup.
//! - `Storage`: the chat log cannot be read or written. Never fatal; an append
//!   failure is reported inline as "message not saved" and a read failure
//!   degrades to an empty history.
//!
//! Empty user input is not an error at all: the response selector answers it
//! with a fixed prompt before the classifier is consulted.
//!
//! ## Architecture
//!
//! - `ChatbotError`: a `thiserror` enum carrying a human-readable message.
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so call sites can attach
//!   context with `anyhow::Context` while the category stays recoverable via
//!   `downcast_ref::<ChatbotError>()`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a categorised error
//! if !path.exists() {
//!     anyhow::bail!(ChatbotError::Configuration(format!(
//!         "intents file not found: {}",
//!         path.display()
//!     )));
//! }
//!
//! // Inspect the category further up the stack
//! if let Some(ChatbotError::Storage(_)) = err.downcast_ref::<ChatbotError>() {
//!     println!("(message not saved)");
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the IntentBot application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatbotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `ChatbotError` category carried by an `anyhow::Error`, if any.
///
/// Context layers added with `anyhow::Context` are looked through, so a
/// storage failure wrapped as "Failed to append to chat log" still reports
/// `Some(ChatbotError::Storage(..))`.
pub fn category(err: &anyhow::Error) -> Option<&ChatbotError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ChatbotError>())
}
