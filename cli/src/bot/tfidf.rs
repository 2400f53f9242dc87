//! TF-IDF vectorizer for text feature extraction.

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

/// Words of two or more word characters. Single letters ("a", "I") carry no signal.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid regex: token pattern"));

/// A sparse feature vector: `(term index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Lowercases `text` and splits it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// TF-IDF vectorizer with smoothed IDF and L2-normalised output.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index, assigned in order of first appearance.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Fit the vectorizer on training documents.
    pub fn fit(documents: &[String]) -> Self {
        let mut vocabulary = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let unique: HashSet<String> = tokenize(doc).into_iter().collect();
            // Index assignment must not depend on HashSet iteration order.
            for token in tokenize(doc) {
                if !vocabulary.contains_key(&token) {
                    vocabulary.insert(token, document_frequency.len());
                    document_frequency.push(0);
                }
            }
            for token in &unique {
                document_frequency[vocabulary[token]] += 1;
            }
        }

        // IDF = ln((N + 1) / (df + 1)) + 1
        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        Self {
            vocabulary,
            idf,
            n_documents: documents.len(),
        }
    }

    /// Transform a document into an L2-normalised TF-IDF vector.
    ///
    /// Terms outside the fitted vocabulary are dropped. A document with no
    /// known terms yields an empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut weighted: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weighted {
                *w /= norm;
            }
        }
        weighted
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }
}
