//! # Text Classifier
//!
//! File: cli/src/bot/classifier.rs
//!
//! ## Overview
//!
//! Maps free text to the best-matching intent tag with a bag-of-words model:
//! TF-IDF features (see `tfidf`) feeding a multinomial logistic regression.
//!
//! ## Training
//!
//! `ClassifierModel::train` validates the corpus first (non-empty, parallel
//! sequences, at least two distinct tags) and then fits one weight vector
//! plus an intercept per tag by stochastic gradient descent on the softmax
//! cross-entropy with an L2 penalty. Samples are visited in an order shuffled
//! every epoch by a `StdRng` seeded from `ClassifierSettings::seed`, so the
//! same corpus and settings always produce the same model.
//!
//! ## Prediction
//!
//! `predict` never fails. Unknown words simply contribute nothing, and text
//! with no known words is scored on the intercepts alone. Ties go to the tag
//! that appeared first in the corpus. Filtering out empty input is the
//! caller's responsibility (see `responder`).
//!
use crate::bot::intents::TrainingCorpus;
use crate::bot::tfidf::{SparseVector, TfIdfVectorizer};
use crate::core::config::ClassifierSettings;
use crate::core::error::{ChatbotError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::{debug, info};

/// A trained intent classifier. Immutable once built.
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    vectorizer: TfIdfVectorizer,
    /// Tags in order of first appearance in the corpus.
    classes: Vec<String>,
    /// `weights[class][term]`.
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    epochs_run: usize,
}

impl ClassifierModel {
    /// Fits a model on `corpus`.
    ///
    /// # Errors
    ///
    /// - `ChatbotError::Data` if the corpus is empty or its sequences differ in length.
    /// - `ChatbotError::Training` if fewer than two distinct tags are present.
    pub fn train(corpus: &TrainingCorpus, settings: &ClassifierSettings) -> Result<Self> {
        if corpus.texts.len() != corpus.tags.len() {
            anyhow::bail!(ChatbotError::Data(format!(
                "training corpus has {} texts but {} tags",
                corpus.texts.len(),
                corpus.tags.len()
            )));
        }
        if corpus.is_empty() {
            anyhow::bail!(ChatbotError::Data("training corpus is empty".into()));
        }
        let classes: Vec<String> = corpus
            .distinct_tags()
            .into_iter()
            .map(str::to_string)
            .collect();
        if classes.len() < 2 {
            anyhow::bail!(ChatbotError::Training(format!(
                "need at least 2 distinct intent tags to train, found {} ({})",
                classes.len(),
                classes.join(", ")
            )));
        }

        let vectorizer = TfIdfVectorizer::fit(&corpus.texts);
        let features: Vec<SparseVector> = corpus
            .texts
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, tag)| (tag.as_str(), i))
            .collect();
        let labels: Vec<usize> = corpus
            .tags
            .iter()
            .map(|tag| class_index[tag.as_str()])
            .collect();

        let mut model = Self {
            weights: vec![vec![0.0; vectorizer.vocabulary_size()]; classes.len()],
            intercepts: vec![0.0; classes.len()],
            vectorizer,
            classes,
            epochs_run: 0,
        };
        model.fit(&features, &labels, settings);

        info!(
            "Trained classifier on {} examples: {} tags, {} terms, {} epochs",
            corpus.len(),
            model.classes.len(),
            model.vectorizer.vocabulary_size(),
            model.epochs_run
        );
        Ok(model)
    }

    fn fit(&mut self, features: &[SparseVector], labels: &[usize], settings: &ClassifierSettings) {
        let n = features.len();
        let lr = settings.learning_rate;
        // Penalty applied once per epoch, equivalent to n per-sample decays.
        let decay = (1.0 - lr * settings.l2_penalty).max(0.0).powi(n as i32);
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let mut order: Vec<usize> = (0..n).collect();
        let mut previous_loss = f64::INFINITY;

        for epoch in 0..settings.max_epochs {
            order.shuffle(&mut rng);
            let mut data_loss = 0.0;

            for &i in &order {
                let probs = self.probabilities(&features[i]);
                data_loss -= probs[labels[i]].max(f64::MIN_POSITIVE).ln();

                for (k, p) in probs.iter().enumerate() {
                    let gradient = p - if k == labels[i] { 1.0 } else { 0.0 };
                    for &(term, x) in &features[i] {
                        self.weights[k][term] -= lr * gradient * x;
                    }
                    self.intercepts[k] -= lr * gradient;
                }
            }

            if decay < 1.0 {
                for row in &mut self.weights {
                    for w in row.iter_mut() {
                        *w *= decay;
                    }
                }
            }

            self.epochs_run = epoch + 1;
            let penalty: f64 = self
                .weights
                .iter()
                .flatten()
                .map(|w| w * w)
                .sum::<f64>()
                * settings.l2_penalty
                / 2.0;
            let loss = data_loss / n as f64 + penalty;
            if (previous_loss - loss).abs() < settings.tolerance {
                debug!("Converged after {} epochs (loss {:.6})", self.epochs_run, loss);
                break;
            }
            previous_loss = loss;
        }
    }

    /// Returns the most likely tag for `text`.
    pub fn predict(&self, text: &str) -> &str {
        let probs = self.probabilities(&self.vectorizer.transform(text));
        let mut best = 0;
        for (k, p) in probs.iter().enumerate().skip(1) {
            if *p > probs[best] {
                best = k;
            }
        }
        &self.classes[best]
    }

    /// Probability of every tag for `text`, in class order.
    pub fn scores(&self, text: &str) -> Vec<(&str, f64)> {
        let probs = self.probabilities(&self.vectorizer.transform(text));
        self.classes
            .iter()
            .map(String::as_str)
            .zip(probs)
            .collect()
    }

    /// Tags this model can predict, in order of first appearance.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs_run
    }

    fn probabilities(&self, x: &SparseVector) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| b + x.iter().map(|&(term, v)| row[term] * v).sum::<f64>())
            .collect();
        softmax(&logits)
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
