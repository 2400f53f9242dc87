//! # IntentBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the chatbot engine and the commands:
//! - `config`: configuration loading, merging and validation
//! - `error`: the `ChatbotError` taxonomy and the `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ChatbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
