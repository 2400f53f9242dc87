//! # IntentBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are neither chatbot logic (`bot::`) nor command wiring
//! (`commands::`):
//!
//! - **`fs`**: filesystem helpers used by the intent store and the chat log.
//! - **`ui`**: terminal rendering of replies, transcripts and history.
//!

/// Filesystem helpers (reads that tolerate absence, parent directory creation).
pub mod fs;
/// Terminal output formatting for chat turns and transcripts.
pub mod ui;
