//! # Response Selector
//!
//! File: cli/src/bot/responder.rs
//!
//! Turns user text into a `Reply`: blank input is answered with a fixed prompt
//! without touching the classifier; anything else is classified and answered
//! with a response drawn at random from the predicted intent.
//!
//! Randomness is injected so tests (and `--seed`) get reproducible replies.
//! Nothing here writes to disk; persisting the exchange is the caller's job.
//!
use crate::bot::classifier::ClassifierModel;
use crate::bot::intents::{self, Intent};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Tag reported when no real intent produced the reply.
pub const UNKNOWN_TAG: &str = "unknown";
/// Reply to empty or whitespace-only input.
pub const EMPTY_INPUT_RESPONSE: &str = "I'm here to chat! Please enter a message.";
/// Reply when the predicted intent has no responses.
pub const NO_RESPONSES_FALLBACK: &str = "Sorry, I don't have an answer for that.";
/// Reply when the predicted tag matches no intent.
pub const UNMATCHED_TAG_RESPONSE: &str = "I'm not sure how to respond to that.";

/// A chatbot answer and the tag that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub response: String,
    pub tag: String,
}

impl Reply {
    fn new(response: &str, tag: &str) -> Self {
        Self {
            response: response.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Chooses a reply for `text`.
pub fn respond<R: Rng + ?Sized>(
    intents: &[Intent],
    model: &ClassifierModel,
    text: &str,
    rng: &mut R,
) -> Reply {
    if text.trim().is_empty() {
        debug!("Blank input, prompting for a message");
        return Reply::new(EMPTY_INPUT_RESPONSE, UNKNOWN_TAG);
    }

    let tag = model.predict(text);
    debug!("Predicted tag '{}' for {:?}", tag, text);

    match intents::find(intents, tag) {
        Some(intent) => {
            let response = intent
                .responses
                .choose(rng)
                .map(String::as_str)
                .unwrap_or(NO_RESPONSES_FALLBACK);
            Reply::new(response, &intent.tag)
        }
        None => {
            warn!("Predicted tag '{}' has no matching intent", tag);
            Reply::new(UNMATCHED_TAG_RESPONSE, UNKNOWN_TAG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ClassifierSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(json: &str) -> (Vec<Intent>, ClassifierModel) {
        let intents = intents::parse(json).unwrap();
        let model =
            ClassifierModel::train(&intents::corpus(&intents), &ClassifierSettings::default())
                .unwrap();
        (intents, model)
    }

    fn greeting_goodbye() -> (Vec<Intent>, ClassifierModel) {
        catalog(
            r#"[
            {"tag": "greeting", "patterns": ["hi", "hello"], "responses": ["Hey!"]},
            {"tag": "goodbye", "patterns": ["bye"], "responses": ["See ya"]}
        ]"#,
        )
    }

    #[test]
    fn answers_greeting_and_goodbye() {
        let (intents, model) = greeting_goodbye();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            respond(&intents, &model, "hello", &mut rng),
            Reply::new("Hey!", "greeting")
        );
        assert_eq!(
            respond(&intents, &model, "bye", &mut rng),
            Reply::new("See ya", "goodbye")
        );
    }

    #[test]
    fn blank_input_short_circuits() {
        let (intents, model) = greeting_goodbye();
        let mut rng = StdRng::seed_from_u64(0);
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                respond(&intents, &model, blank, &mut rng),
                Reply::new(EMPTY_INPUT_RESPONSE, UNKNOWN_TAG)
            );
        }
    }

    #[test]
    fn blank_input_bypasses_the_classifier() {
        // Trained with intents the catalog handed to `respond` does not contain:
        // any call into the classifier would surface as the unmatched reply.
        let (_, model) = greeting_goodbye();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            respond(&[], &model, " ", &mut rng),
            Reply::new(EMPTY_INPUT_RESPONSE, UNKNOWN_TAG)
        );
        assert_eq!(
            respond(&[], &model, "hello", &mut rng),
            Reply::new(UNMATCHED_TAG_RESPONSE, UNKNOWN_TAG)
        );
    }

    #[test]
    fn empty_response_list_uses_fallback() {
        let (intents, model) = catalog(
            r#"[
            {"tag": "greeting", "patterns": ["hello"], "responses": []},
            {"tag": "goodbye", "patterns": ["bye"], "responses": ["See ya"]}
        ]"#,
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            respond(&intents, &model, "hello", &mut rng),
            Reply::new(NO_RESPONSES_FALLBACK, "greeting")
        );
    }

    #[test]
    fn responses_come_from_the_intent_and_follow_the_seed() {
        let (intents, model) = catalog(
            r#"[
            {"tag": "greeting", "patterns": ["hello"], "responses": ["A", "B", "C", "D"]},
            {"tag": "goodbye", "patterns": ["bye"], "responses": ["See ya"]}
        ]"#,
        );
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| respond(&intents, &model, "hello", &mut rng).response)
                .collect::<Vec<_>>()
        };
        let first = draw(5);
        assert_eq!(first, draw(5));
        assert!(first.iter().all(|r| ["A", "B", "C", "D"].contains(&r.as_str())));
    }
}
