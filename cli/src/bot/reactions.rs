//! Emoji reactions shown next to bot replies, keyed by intent tag.

use std::collections::HashMap;

/// Emoji for tags without a reaction of their own.
pub const DEFAULT_REACTION: &str = "💬";
/// Emoji shown next to the user's own lines.
pub const USER_REACTION: &str = "🧑‍💻";

const BUILT_IN: &[(&str, &str)] = &[
    ("greeting", "👋"),
    ("goodbye", "👋😊"),
    ("age", "⏳"),
    ("thankyou", "🙏"),
    ("help", "💡"),
    ("unknown", "🤔"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactions {
    by_tag: HashMap<String, String>,
}

impl Default for Reactions {
    fn default() -> Self {
        Self {
            by_tag: BUILT_IN
                .iter()
                .map(|(tag, emoji)| (tag.to_string(), emoji.to_string()))
                .collect(),
        }
    }
}

impl Reactions {
    /// Built-in reactions with `overrides` layered on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut reactions = Self::default();
        reactions
            .by_tag
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        reactions
    }

    pub fn for_tag(&self, tag: &str) -> &str {
        self.by_tag
            .get(tag)
            .map(String::as_str)
            .unwrap_or(DEFAULT_REACTION)
    }
}
