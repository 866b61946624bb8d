use std::cmp::Ordering;

use crate::processing::catalog::Catalog;
use crate::processing::embedding::{
    EmbeddingError, EmbeddingProvider, EmbeddingResult, check_batch, cosine_similarity,
};

/// Job-descriptor embeddings aligned index-for-index with
/// [`Catalog::unique_jobs`]. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct JobEmbeddingTable {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl JobEmbeddingTable {
    /// Embed every job descriptor of the catalog in a single batch.
    pub fn build(catalog: &Catalog, provider: &dyn EmbeddingProvider) -> EmbeddingResult<Self> {
        let texts: Vec<String> = catalog
            .unique_jobs()
            .iter()
            .map(|descriptor| descriptor.render())
            .collect();
        if texts.is_empty() {
            return Ok(Self {
                dimension: 0,
                vectors: Vec::new(),
            });
        }

        let vectors = check_batch(texts.len(), provider.embed_batch(&texts)?)?;
        Self::from_vectors(vectors)
    }

    /// Wrap precomputed vectors, requiring one shared dimension.
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> EmbeddingResult<Self> {
        let dimension = vectors.first().map(Vec::len).unwrap_or_default();
        if let Some(bad) = vectors.iter().find(|vector| vector.len() != dimension) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }
        Ok(Self { dimension, vectors })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// A scored job descriptor returned by [`SimilarityEngine::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub job_text: String,
    pub score: f32,
}

/// Brute-force cosine search over all job descriptors.
pub struct SimilarityEngine {
    catalog: Catalog,
    table: JobEmbeddingTable,
}

impl SimilarityEngine {
    /// Pair a catalog with its embedding table.
    ///
    /// Fails when the table is not aligned with the catalog's job descriptors.
    pub fn new(catalog: Catalog, table: JobEmbeddingTable) -> EmbeddingResult<Self> {
        if catalog.unique_jobs().len() != table.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: catalog.unique_jobs().len(),
                actual: table.len(),
            });
        }
        Ok(Self { catalog, table })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Score `query` against every job descriptor and keep the best `top_n`
    /// at or above `threshold`.
    ///
    /// An empty or missing `category_filter` matches every category. Equal
    /// scores keep catalog order.
    pub fn search(
        &self,
        query: &[f32],
        category_filter: Option<&str>,
        threshold: f32,
        top_n: usize,
    ) -> EmbeddingResult<Vec<SearchHit>> {
        if self.table.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() != self.table.dimension() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.table.dimension(),
                actual: query.len(),
            });
        }

        let category_filter = category_filter.filter(|category| !category.is_empty());
        let descriptors = self.catalog.unique_jobs();

        let mut scored: Vec<(usize, f32)> = self
            .table
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, vector)| (idx, cosine_similarity(query, vector)))
            .filter(|(_, score)| *score >= threshold)
            .filter(|(idx, _)| {
                category_filter.is_none_or(|category| descriptors[*idx].category == category)
            })
            .collect();

        // Stable sort keeps catalog order among equal scores; `0.0` and
        // `-0.0` compare equal.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_n)
            .map(|(idx, score)| SearchHit {
                job_text: descriptors[idx].render(),
                score,
            })
            .collect())
    }
}
