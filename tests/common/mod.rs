//! Helpers for integration tests.

use std::collections::HashMap;

use career_matcher::domain::Record;
use career_matcher::processing::embedding::{EmbeddingProvider, EmbeddingResult};

/// Deterministic embedder returning fixed vectors keyed by input text.
///
/// Texts without a registered vector map to `fallback`.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
}

impl StubEmbedder {
    pub fn new(fallback: Vec<f32>) -> Self {
        Self {
            vectors: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl EmbeddingProvider for StubEmbedder {
    fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| self.fallback.clone())
            })
            .collect())
    }
}

/// Unit vector in the plane at the given cosine to `[1, 0]`.
pub fn at_cosine(cosine: f32) -> Vec<f32> {
    vec![cosine, (1.0 - cosine * cosine).sqrt()]
}

pub fn record(major: &str, job: &str, category: &str) -> Record {
    Record::new(major, job, category)
}
