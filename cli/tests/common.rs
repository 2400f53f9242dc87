//! # IntentBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the real `intentbot` binary inside its own temporary directory, with the
//! user config location pointed into that directory so a developer's own
//! `~/.config/intentbot/config.toml` cannot leak into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A catalog whose patterns classify unambiguously, with one response each.
pub const SAMPLE_INTENTS: &str = r#"[
    {"tag": "greeting", "patterns": ["hi", "hello", "hey there"], "responses": ["Hey!"]},
    {"tag": "goodbye", "patterns": ["bye", "see you later", "goodbye"], "responses": ["See ya"]},
    {"tag": "help", "patterns": ["I need help", "can you help me"], "responses": ["Sure, ask away"]}
]"#;

/// The `intentbot` binary with no workspace attached.
pub fn intentbot_cmd() -> Command {
    Command::cargo_bin("intentbot").expect("Failed to find intentbot binary for testing")
}

/// A temporary working directory holding `intents.json`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_intents(SAMPLE_INTENTS)
    }

    pub fn with_intents(json: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("intents.json"), json).expect("Failed to write intents");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("chat_log.csv")
    }

    /// `intentbot` running in this workspace with a fixed response seed.
    pub fn cmd(&self) -> Command {
        let mut cmd = intentbot_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("INTENTBOT_CONFIG")
            .env_remove("RUST_LOG")
            .args(["--intents", "intents.json", "--log", "chat_log.csv", "--seed", "1"]);
        cmd
    }
}
