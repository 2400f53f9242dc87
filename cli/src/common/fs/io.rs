//! # IntentBot Filesystem I/O Helpers
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the intent store and the chat log:
//! - **`read_if_exists`**: reads a file to a string, distinguishing "absent"
//!   (`Ok(None)`) from "present but unreadable" (`Err`).
//! - **`ensure_parent_dir`**: creates the parent directory of a file path,
//!   like `mkdir -p "$(dirname path)"`, so a log can be opened in a directory
//!   that does not exist yet.
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Reads the whole file at `path`, or returns `Ok(None)` when it does not exist.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {:?}", content.len(), path);
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Ensures the directory that will contain `path` exists.
///
/// Paths without a parent component (a bare file name, or `/`) need nothing.
/// If the parent exists but is not a directory, a `ChatbotError::Storage` is
/// returned.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
        info!("Created directory: {:?}", parent);
    } else if !parent.is_dir() {
        anyhow::bail!(ChatbotError::Storage(format!(
            "Path exists but is not a directory: {:?}",
            parent
        )));
    }
    Ok(())
}
