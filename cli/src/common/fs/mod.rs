//! # IntentBot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::read_if_exists`.
//!

/// File reads that tolerate absence, and parent directory creation.
pub mod io;
