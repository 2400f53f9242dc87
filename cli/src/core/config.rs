//! # IntentBot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the IntentBot configuration: where
//! the intents catalog and the chat log live, how the classifier is trained,
//! and which emoji reacts to which intent tag.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--intents`, `--log`, `--seed`), applied by the caller
//!    through `Overrides`.
//! 2. An explicit file given with `--config` / `INTENTBOT_CONFIG`, or else a
//!    project `.intentbot.toml` in the current directory or its ancestors.
//! 3. The user file `config.toml` in the platform config directory.
//! 4. Default values defined in the code.
//!
//! Paths are tilde-expanded once everything is merged, then the result is
//! validated before any component sees it.
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! intents_file = "~/bots/intents.json"
//! chat_log = "chat_log.csv"
//!
//! [classifier]
//! seed = 7
//! max_epochs = 500
//!
//! [reactions]
//! weather = "🌦️"
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    /// Tag → emoji overrides, layered on top of the built-in reactions.
    #[serde(default)]
    pub reactions: HashMap<String, String>,
}

/// File locations and response behaviour.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Path to the JSON intents catalog (can use ~).
    #[serde(default = "default_intents_file")]
    pub intents_file: String,
    /// Path to the CSV chat log (can use ~).
    #[serde(default = "default_chat_log")]
    pub chat_log: String,
    /// Seed for response selection. `None` draws from OS entropy.
    #[serde(default)]
    pub response_seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            intents_file: default_intents_file(),
            chat_log: default_chat_log(),
            response_seed: None,
        }
    }
}

/// Hyper-parameters for the logistic regression fit.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassifierSettings {
    /// Seed for the per-epoch shuffle. Same seed and corpus, same model.
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_max_epochs")]
    pub max_epochs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_l2_penalty")]
    pub l2_penalty: f64,
    /// Stop early once the mean epoch loss improves by less than this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            max_epochs: default_max_epochs(),
            learning_rate: default_learning_rate(),
            l2_penalty: default_l2_penalty(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_intents_file() -> String {
    "intents.json".to_string()
}
fn default_chat_log() -> String {
    "chat_log.csv".to_string()
}
fn default_max_epochs() -> usize {
    300
}
fn default_learning_rate() -> f64 {
    0.5
}
fn default_l2_penalty() -> f64 {
    1e-4
}
fn default_tolerance() -> f64 {
    1e-6
}

const PROJECT_CONFIG_FILENAME: &str = ".intentbot.toml";

/// Values supplied on the command line. `None` leaves the file setting alone.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub intents_file: Option<PathBuf>,
    pub chat_log: Option<PathBuf>,
    pub response_seed: Option<u64>,
}

/// Loads the effective configuration for this process.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match &overrides.config_file {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_project_config()?,
    };
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged, overrides);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "IntentBot", "intentbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!("User configuration file not found at {}", config_path.display());
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks up from `start` looking for `.intentbot.toml`, stopping at a `.git` root.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!("Found .git directory at {}, stopping project config search.", path.display());
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        anyhow!(ChatbotError::Configuration(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        )))
    })?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(ChatbotError::Configuration(format!(
            "failed to parse TOML from {}: {}",
            path.display(),
            e
        )))
    })
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();

    let bot = BotConfig {
        intents_file: if project.bot.intents_file != defaults.bot.intents_file {
            project.bot.intents_file
        } else {
            user.bot.intents_file
        },
        chat_log: if project.bot.chat_log != defaults.bot.chat_log {
            project.bot.chat_log
        } else {
            user.bot.chat_log
        },
        response_seed: project.bot.response_seed.or(user.bot.response_seed),
    };

    let classifier = if project.classifier != defaults.classifier {
        project.classifier
    } else {
        user.classifier
    };

    let mut reactions = user.reactions;
    reactions.extend(project.reactions);

    Config {
        bot,
        classifier,
        reactions,
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(path) = &overrides.intents_file {
        config.bot.intents_file = path.to_string_lossy().into_owned();
    }
    if let Some(path) = &overrides.chat_log {
        config.bot.chat_log = path.to_string_lossy().into_owned();
    }
    if overrides.response_seed.is_some() {
        config.bot.response_seed = overrides.response_seed;
    }
}

fn expand_config_paths(config: &mut Config) {
    config.bot.intents_file = shellexpand::tilde(&config.bot.intents_file).into_owned();
    config.bot.chat_log = shellexpand::tilde(&config.bot.chat_log).into_owned();
    debug!(
        "Expanded paths: intents={}, chat_log={}",
        config.bot.intents_file, config.bot.chat_log
    );
}

fn validate_config(config: &Config) -> Result<()> {
    let invalid = |msg: String| -> Result<()> { Err(anyhow!(ChatbotError::Configuration(msg))) };

    if config.bot.intents_file.trim().is_empty() {
        return invalid("intents_file cannot be empty".into());
    }
    if config.bot.chat_log.trim().is_empty() {
        return invalid("chat_log cannot be empty".into());
    }
    let c = &config.classifier;
    if c.max_epochs == 0 {
        return invalid("classifier.max_epochs must be at least 1".into());
    }
    if !(c.learning_rate.is_finite() && c.learning_rate > 0.0) {
        return invalid(format!(
            "classifier.learning_rate must be positive, got {}",
            c.learning_rate
        ));
    }
    if !(c.l2_penalty.is_finite() && c.l2_penalty >= 0.0) {
        return invalid(format!(
            "classifier.l2_penalty must be non-negative, got {}",
            c.l2_penalty
        ));
    }
    if !(c.tolerance.is_finite() && c.tolerance >= 0.0) {
        return invalid(format!(
            "classifier.tolerance must be non-negative, got {}",
            c.tolerance
        ));
    }
    for (tag, emoji) in &config.reactions {
        if emoji.trim().is_empty() {
            return invalid(format!("reaction for tag '{}' cannot be empty", tag));
        }
    }
    Ok(())
}
